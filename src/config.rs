// Build-time configuration. Values are inlined from the environment when
// the site is compiled and never change afterwards.

/// Sentinel apply URL meaning the application form is not live yet.
pub const APPLICATION_CLOSED: &str = "coming_soon";

pub fn get_site_url() -> &'static str {
    match option_env!("MONEYHACKS_SITE_URL") {
        Some(url) => url,
        None => "http://localhost:8080",
    }
}

pub fn get_apply_url() -> &'static str {
    match option_env!("MONEYHACKS_APPLY_URL") {
        Some(url) => url,
        None => APPLICATION_CLOSED,
    }
}

pub fn get_org_url() -> &'static str {
    match option_env!("MONEYHACKS_ORG_URL") {
        Some(url) => url,
        None => "https://aivalley.io",
    }
}

pub fn get_contact_email() -> &'static str {
    match option_env!("MONEYHACKS_CONTACT_EMAIL") {
        Some(email) => email,
        None => "community@aivalley.io",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplicationStatus {
    Open(&'static str),
    ComingSoon,
}

impl ApplicationStatus {
    pub fn from_url(url: &'static str) -> Self {
        if url == APPLICATION_CLOSED {
            ApplicationStatus::ComingSoon
        } else {
            ApplicationStatus::Open(url)
        }
    }

    pub fn current() -> Self {
        Self::from_url(get_apply_url())
    }

    pub fn is_open(&self) -> bool {
        matches!(self, ApplicationStatus::Open(_))
    }

    pub fn cta_label(&self) -> &'static str {
        match self {
            ApplicationStatus::Open(_) => "Apply Now",
            ApplicationStatus::ComingSoon => "Applications Opening Soon",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_url_means_coming_soon() {
        let status = ApplicationStatus::from_url(APPLICATION_CLOSED);
        assert_eq!(status, ApplicationStatus::ComingSoon);
        assert!(!status.is_open());
        assert_eq!(status.cta_label(), "Applications Opening Soon");
    }

    #[test]
    fn real_url_means_open() {
        let status = ApplicationStatus::from_url("https://apply.example.com/moneyhacks");
        assert_eq!(
            status,
            ApplicationStatus::Open("https://apply.example.com/moneyhacks")
        );
        assert!(status.is_open());
        assert_eq!(status.cta_label(), "Apply Now");
    }

    #[test]
    fn open_status_targets_exactly_the_configured_url() {
        match ApplicationStatus::from_url("https://forms.example.com/x") {
            ApplicationStatus::Open(url) => assert_eq!(url, "https://forms.example.com/x"),
            ApplicationStatus::ComingSoon => panic!("expected open status"),
        }
    }

    #[test]
    fn defaults_are_populated() {
        assert!(!get_site_url().is_empty());
        assert!(!get_org_url().is_empty());
        assert!(get_contact_email().contains('@'));
    }
}
