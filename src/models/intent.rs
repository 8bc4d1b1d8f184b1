#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Welcome,
    Fallback,
    BookAppointment,
}

impl Intent {
    /// Unknown names are left to the platform's own default response.
    pub fn from_display_name(name: &str) -> Option<Self> {
        match name {
            "Default Welcome Intent" => Some(Intent::Welcome),
            "Default Fallback Intent" => Some(Intent::Fallback),
            "bookAppointment" => Some(Intent::BookAppointment),
            _ => None,
        }
    }
}
