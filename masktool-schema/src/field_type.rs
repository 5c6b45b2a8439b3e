/// Texture sizes a mask may be limited to, in the order they are offered for selection
pub const TEXTURE_SIZES: [i64; 7] = [32, 64, 128, 256, 512, 1024, 2048];

/// Declared type of a schema field. Editing and coercion dispatch on this tag rather than on
/// the runtime type of the stored value.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum FieldType {
    String,
    Integer,
    Float,
    Boolean,
    /// N float components edited independently under one field name
    FloatVector(usize),
    /// Integer restricted to `TEXTURE_SIZES`, edited by selection
    TextureSize,
}

impl FieldType {
    pub fn name(&self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Integer => "integer",
            FieldType::Float => "float",
            FieldType::Boolean => "boolean",
            FieldType::FloatVector(_) => "float vector",
            FieldType::TextureSize => "texture size",
        }
    }

    pub fn is_numeric(&self) -> bool {
        match self {
            FieldType::Integer | FieldType::Float | FieldType::TextureSize => true,
            _ => false,
        }
    }
}

pub fn texture_size_index(size: i64) -> Option<usize> {
    TEXTURE_SIZES.iter().position(|x| *x == size)
}
