use crate::types::{PaneId, TabId};

pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// A fresh pane identity.
pub fn new_pane_id() -> PaneId {
    PaneId::new(new_id())
}

/// A fresh tab identity.
pub fn new_tab_id() -> TabId {
    TabId::new(new_id())
}

/// Short id used to correlate log lines of one user action.
pub fn new_correlation_id() -> String {
    let uuid = uuid::Uuid::new_v4();
    let bytes = uuid.as_bytes();
    format!(
        "{:02x}{:02x}{:02x}{:02x}",
        bytes[0], bytes[1], bytes[2], bytes[3]
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_id_is_valid_uuid() {
        let id = new_id();
        let parsed = uuid::Uuid::parse_str(&id);
        assert!(parsed.is_ok());
        assert_eq!(parsed.unwrap().get_version_num(), 4);
    }

    #[test]
    fn new_id_is_unique() {
        assert_ne!(new_id(), new_id());
    }

    #[test]
    fn pane_and_tab_ids_are_uuids() {
        assert!(uuid::Uuid::parse_str(new_pane_id().as_str()).is_ok());
        assert!(uuid::Uuid::parse_str(new_tab_id().as_str()).is_ok());
        assert_ne!(new_pane_id(), new_pane_id());
    }

    #[test]
    fn correlation_id_is_short_hex() {
        let cid = new_correlation_id();
        assert_eq!(cid.len(), 8);
        assert!(cid.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
