use crate::sample::{SCHOOL_NAME, TEACHER_NAME, TEACHER_USERNAME};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    OfflineSync,
    WifiSharing,
    AutoBackup,
    Notifications,
}

/// Settings screen fields. `offline_sync` is local to the screen and does
/// not drive the session's offline banner.
#[derive(Debug, Clone)]
pub struct SettingsForm {
    pub username: String,
    pub full_name: String,
    pub school: String,
    pub offline_sync: bool,
    pub wifi_sharing: bool,
    pub auto_backup: bool,
    pub notifications: bool,
}

impl Default for SettingsForm {
    fn default() -> Self {
        Self {
            username: TEACHER_USERNAME.to_string(),
            full_name: TEACHER_NAME.to_string(),
            school: SCHOOL_NAME.to_string(),
            offline_sync: true,
            wifi_sharing: false,
            auto_backup: false,
            notifications: true,
        }
    }
}

impl SettingsForm {
    pub fn set(&mut self, toggle: Toggle, on: bool) {
        *self.toggle_mut(toggle) = on;
    }

    pub fn get(&self, toggle: Toggle) -> bool {
        match toggle {
            Toggle::OfflineSync => self.offline_sync,
            Toggle::WifiSharing => self.wifi_sharing,
            Toggle::AutoBackup => self.auto_backup,
            Toggle::Notifications => self.notifications,
        }
    }

    fn toggle_mut(&mut self, toggle: Toggle) -> &mut bool {
        match toggle {
            Toggle::OfflineSync => &mut self.offline_sync,
            Toggle::WifiSharing => &mut self.wifi_sharing,
            Toggle::AutoBackup => &mut self.auto_backup,
            Toggle::Notifications => &mut self.notifications,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_sample_profile() {
        let form = SettingsForm::default();
        assert_eq!(form.username, "teacher@school.edu");
        assert!(form.get(Toggle::OfflineSync));
        assert!(form.get(Toggle::Notifications));
        assert!(!form.get(Toggle::WifiSharing));
        assert!(!form.get(Toggle::AutoBackup));
    }

    #[test]
    fn toggles_are_independent() {
        let mut form = SettingsForm::default();
        form.set(Toggle::WifiSharing, true);
        form.set(Toggle::OfflineSync, false);
        assert!(form.wifi_sharing);
        assert!(!form.offline_sync);
        assert!(form.notifications);
    }
}
