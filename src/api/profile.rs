use serde_json::Value;

/// Read-only view over a People API `people/me` response.
pub struct ProfileData<'a> {
    raw: &'a Value,
}

impl<'a> ProfileData<'a> {
    pub fn new(raw: &'a Value) -> Self {
        Self { raw }
    }

    pub fn display_name(&self) -> Option<&'a str> {
        self.first("names", "displayName")
    }

    pub fn photo_url(&self) -> Option<&'a str> {
        self.first("photos", "url")
    }

    pub fn email(&self) -> Option<&'a str> {
        self.first("emailAddresses", "value")
    }

    fn first(&self, list: &str, field: &str) -> Option<&'a str> {
        self.raw.get(list)?.get(0)?.get(field)?.as_str()
    }
}
