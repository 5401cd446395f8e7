use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid hex color: {0}")]
    InvalidHexColor(String),

    #[error("Cyclic value cannot be converted to JSON")]
    CyclicValue,
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn code(&self) -> &'static str {
        match self {
            Error::InvalidHexColor(_) => "INVALID_HEX_COLOR",
            Error::CyclicValue => "CYCLIC_VALUE",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_variant_has_a_code() {
        assert_eq!(Error::InvalidHexColor("#zz".into()).code(), "INVALID_HEX_COLOR");
        assert_eq!(Error::CyclicValue.code(), "CYCLIC_VALUE");
    }
}
