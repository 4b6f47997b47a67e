#[derive(Debug, Clone, PartialEq)]
pub enum BarError {
    NoItems,
    IndexOutOfRange { index: usize, count: usize },
    InvalidStyle { field: &'static str, value: f32 },
    InvalidWidth { width: f32 },
}

impl std::fmt::Display for BarError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BarError::NoItems => write!(f, "bottom bar needs at least one item"),
            BarError::IndexOutOfRange { index, count } => {
                write!(f, "item index {index} out of range for {count} items")
            }
            BarError::InvalidStyle { field, value } => {
                write!(f, "invalid style value {value} for {field}")
            }
            BarError::InvalidWidth { width } => write!(f, "invalid bar width {width}"),
        }
    }
}

impl std::error::Error for BarError {}
