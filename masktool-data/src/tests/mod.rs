use crate::{AdditionKind, Record, SchemaRegistry};

mod addition_list;
mod json_storage;

fn addition(
    kind: AdditionKind,
    name: &str,
) -> Record {
    let mut record = Record::new(SchemaRegistry::get().addition_schema(kind));
    record
        .set("name", crate::FieldInput::Text(name))
        .unwrap();
    record
}
