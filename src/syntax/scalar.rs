use std::fmt;

/// Built-in scalar value types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarType {
    Double,
    Float,
    Int64,
    Uint64,
    Int32,
    Fixed64,
    Fixed32,
    Bool,
    String,
    Bytes,
    Uint32,
    Sfixed32,
    Sfixed64,
    Sint32,
    Sint64,
}

impl ScalarType {
    pub const ALL: [ScalarType; 15] = [
        ScalarType::Double,
        ScalarType::Float,
        ScalarType::Int64,
        ScalarType::Uint64,
        ScalarType::Int32,
        ScalarType::Fixed64,
        ScalarType::Fixed32,
        ScalarType::Bool,
        ScalarType::String,
        ScalarType::Bytes,
        ScalarType::Uint32,
        ScalarType::Sfixed32,
        ScalarType::Sfixed64,
        ScalarType::Sint32,
        ScalarType::Sint64,
    ];

    /// Match a type keyword as written in a schema.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.keyword() == keyword)
    }

    pub fn keyword(&self) -> &'static str {
        match self {
            ScalarType::Double => "double",
            ScalarType::Float => "float",
            ScalarType::Int64 => "int64",
            ScalarType::Uint64 => "uint64",
            ScalarType::Int32 => "int32",
            ScalarType::Fixed64 => "fixed64",
            ScalarType::Fixed32 => "fixed32",
            ScalarType::Bool => "bool",
            ScalarType::String => "string",
            ScalarType::Bytes => "bytes",
            ScalarType::Uint32 => "uint32",
            ScalarType::Sfixed32 => "sfixed32",
            ScalarType::Sfixed64 => "sfixed64",
            ScalarType::Sint32 => "sint32",
            ScalarType::Sint64 => "sint64",
        }
    }

    /// The `FieldDescriptorProto.Type` number used in descriptors.
    pub fn to_descriptor_type(&self) -> i32 {
        match self {
            ScalarType::Double => 1,
            ScalarType::Float => 2,
            ScalarType::Int64 => 3,
            ScalarType::Uint64 => 4,
            ScalarType::Int32 => 5,
            ScalarType::Fixed64 => 6,
            ScalarType::Fixed32 => 7,
            ScalarType::Bool => 8,
            ScalarType::String => 9,
            ScalarType::Bytes => 12,
            ScalarType::Uint32 => 13,
            ScalarType::Sfixed32 => 15,
            ScalarType::Sfixed64 => 16,
            ScalarType::Sint32 => 17,
            ScalarType::Sint64 => 18,
        }
    }
}

impl fmt::Display for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}
