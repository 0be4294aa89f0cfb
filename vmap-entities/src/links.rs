use url::Url;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Links {
    pub website: Option<Url>,
    pub facebook: Option<Url>,
    pub instagram: Option<Url>,
}

impl Links {
    pub fn is_empty(&self) -> bool {
        self.website.is_none() && self.facebook.is_none() && self.instagram.is_none()
    }
}
