#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Address {
    pub street   : Option<String>,
    pub postcode : Option<String>,
    pub city     : Option<String>,
    pub country  : Option<String>,
}

impl Address {
    pub fn is_empty(&self) -> bool {
        self.street.is_none()
            && self.postcode.is_none()
            && self.city.is_none()
            && self.country.is_none()
    }

    /// Street, postcode and city are expected for a displayable address.
    pub fn is_complete(&self) -> bool {
        self.street.is_some() && self.postcode.is_some() && self.city.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_address() {
        assert!(Address::default().is_empty());
        let addr = Address {
            city: Some("Halle".into()),
            ..Default::default()
        };
        assert!(!addr.is_empty());
        assert!(!addr.is_complete());
    }
}
