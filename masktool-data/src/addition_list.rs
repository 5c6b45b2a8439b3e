use crate::{AdditionKind, MetaDataError, MetaDataResult, Record, SchemaRegistry};

/// The ordered additions of a mask build, plus the selected row of whatever list shows them.
///
/// Order is the order additions are handed to the asset compiler. Labels are computed from the
/// records each time they're asked for, so they can't drift from the data.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AdditionList {
    records: Vec<Record>,
    selection: Option<usize>,
}

impl AdditionList {
    pub fn new(records: Vec<Record>) -> Self {
        AdditionList {
            records,
            selection: None,
        }
    }

    fn check_index(
        &self,
        index: usize,
    ) -> MetaDataResult<()> {
        if index < self.records.len() {
            Ok(())
        } else {
            Err(MetaDataError::IndexOutOfRange {
                index,
                len: self.records.len(),
            })
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<Record> {
        self.records.iter()
    }

    pub fn get(
        &self,
        index: usize,
    ) -> MetaDataResult<&Record> {
        self.check_index(index)?;
        Ok(&self.records[index])
    }

    pub fn get_mut(
        &mut self,
        index: usize,
    ) -> MetaDataResult<&mut Record> {
        self.check_index(index)?;
        Ok(&mut self.records[index])
    }

    pub fn selection(&self) -> Option<usize> {
        self.selection
    }

    pub fn select(
        &mut self,
        index: Option<usize>,
    ) -> MetaDataResult<()> {
        if let Some(index) = index {
            self.check_index(index)?;
        }

        self.selection = index;
        Ok(())
    }

    pub fn label(
        &self,
        index: usize,
    ) -> MetaDataResult<String> {
        Ok(self.get(index)?.to_display_label())
    }

    pub fn labels(&self) -> Vec<String> {
        self.records.iter().map(|x| x.to_display_label()).collect()
    }

    /// Appends a new addition holding the defaults for `kind`, returns its index
    pub fn append_default(
        &mut self,
        kind: AdditionKind,
    ) -> usize {
        let schema = SchemaRegistry::get().addition_schema(kind);
        self.append(Record::new(schema))
    }

    pub fn append(
        &mut self,
        record: Record,
    ) -> usize {
        self.records.push(record);
        self.records.len() - 1
    }

    pub fn replace(
        &mut self,
        index: usize,
        record: Record,
    ) -> MetaDataResult<Record> {
        self.check_index(index)?;
        Ok(std::mem::replace(&mut self.records[index], record))
    }

    /// Removes the addition, later entries shift down by one. A selection on the removed row
    /// moves to the row that takes its place, or the new last row.
    pub fn remove(
        &mut self,
        index: usize,
    ) -> MetaDataResult<Record> {
        self.check_index(index)?;
        let removed = self.records.remove(index);

        self.selection = match self.selection {
            Some(selected) if selected > index => Some(selected - 1),
            Some(selected) if selected == index => {
                if self.records.is_empty() {
                    None
                } else {
                    Some(index.min(self.records.len() - 1))
                }
            }
            selection => selection,
        };

        Ok(removed)
    }

    /// Swaps the addition with the one above it and selects it in its new position. Returns
    /// false without changing anything if it is already first.
    pub fn move_up(
        &mut self,
        index: usize,
    ) -> MetaDataResult<bool> {
        self.check_index(index)?;
        if index == 0 {
            return Ok(false);
        }

        self.records.swap(index - 1, index);
        self.selection = Some(index - 1);
        Ok(true)
    }

    /// Swaps the addition with the one below it and selects it in its new position. Returns
    /// false without changing anything if it is already last.
    pub fn move_down(
        &mut self,
        index: usize,
    ) -> MetaDataResult<bool> {
        self.check_index(index)?;
        if self.records.len() < 2 || index == self.records.len() - 1 {
            return Ok(false);
        }

        self.records.swap(index, index + 1);
        self.selection = Some(index + 1);
        Ok(true)
    }
}

impl<'a> IntoIterator for &'a AdditionList {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
