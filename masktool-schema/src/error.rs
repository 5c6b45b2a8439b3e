/// Errors raised while reading or editing a metadata record.
///
/// `UnknownKind`, `UnknownField`, `TypeMismatch` and `ReadOnlyField` mean the caller and the
/// schema disagree. `NumericParse` and `InvalidEnumValue` come from user input and leave the
/// record untouched. `IndexOutOfRange` is a violated precondition on an addition list.
#[derive(Debug, Clone, PartialEq)]
pub enum MetaDataError {
    UnknownKind(String),
    UnknownField(String),
    TypeMismatch {
        field: String,
        expected: &'static str,
        found: &'static str,
    },
    NumericParse {
        field: String,
        text: String,
    },
    InvalidEnumValue {
        field: String,
        value: i64,
    },
    IndexOutOfRange {
        index: usize,
        len: usize,
    },
    ReadOnlyField(String),
}

impl MetaDataError {
    /// True for errors caused by what the user typed, as opposed to a schema or caller defect
    pub fn is_user_input_error(&self) -> bool {
        match self {
            MetaDataError::NumericParse { .. } | MetaDataError::InvalidEnumValue { .. } => true,
            _ => false,
        }
    }
}

impl std::error::Error for MetaDataError {}

impl core::fmt::Display for MetaDataError {
    fn fmt(
        &self,
        fmt: &mut core::fmt::Formatter,
    ) -> core::fmt::Result {
        match self {
            MetaDataError::UnknownKind(kind) => write!(fmt, "unknown addition kind '{}'", kind),
            MetaDataError::UnknownField(field) => write!(fmt, "unknown field '{}'", field),
            MetaDataError::TypeMismatch {
                field,
                expected,
                found,
            } => write!(
                fmt,
                "field '{}' expects {} but was given {}",
                field, expected, found
            ),
            MetaDataError::NumericParse { field, text } => {
                write!(fmt, "field '{}' could not parse '{}' as a number", field, text)
            }
            MetaDataError::InvalidEnumValue { field, value } => {
                write!(fmt, "field '{}' does not allow the value {}", field, value)
            }
            MetaDataError::IndexOutOfRange { index, len } => {
                write!(fmt, "index {} is out of range for a list of {}", index, len)
            }
            MetaDataError::ReadOnlyField(field) => write!(fmt, "field '{}' is read-only", field),
        }
    }
}

pub type MetaDataResult<T> = Result<T, MetaDataError>;
