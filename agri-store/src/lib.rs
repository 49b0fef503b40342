//! Application state store for the AgriChain dashboard.
//!
//! [`AppStore`] holds the farmer profile, portfolio statistics, weather,
//! activity log and notifications for one browser session, and mirrors the
//! profile into durable storage keyed by the connected wallet account.
//!
//! # Architecture
//!
//! - Storage is injected through the [`ProfileStorage`] trait; there is no
//!   global instance, so tests build as many stores as they like over
//!   [`MemoryStorage`].
//! - Single-threaded: every mutation runs to completion synchronously.
//!   The dashboard wraps the store in a Dioxus signal.
//! - Only [`AppStore::update_profile`] and [`AppStore::complete_registration`]
//!   write storage, once per call. Storage failures are logged and never
//!   undo the in-memory change.
//! - Persisted snapshots are validated against
//!   [`ProfileSnapshot`](agri_core::profile::ProfileSnapshot); invalid data is
//!   ignored and the store stays at its defaults.
//!
//! # Usage
//!
//! ```rust
//! use agri_core::account::AccountId;
//! use agri_core::profile::ProfilePatch;
//! use agri_store::{AppStore, MemoryStorage};
//!
//! let mut store = AppStore::new(MemoryStorage::new());
//! let account = AccountId::parse("0x52908400098527886e0f7030069857d2e4169ee7").unwrap();
//! store.connect(account);
//!
//! store.complete_registration(ProfilePatch {
//!     name: Some("Asha".to_string()),
//!     ..Default::default()
//! });
//! assert!(store.is_registered());
//! ```

pub mod storage;

pub use storage::{MemoryStorage, ProfileStorage};

use agri_core::account::AccountId;
use agri_core::activity::{Activity, NewActivity};
use agri_core::notification::{NewNotification, Notification};
use agri_core::profile::{FarmerProfile, ProfilePatch, ProfileSnapshot};
use agri_core::record_id::{IdGenerator, RecordId};
use agri_core::stats::{Stats, StatsPatch, StatsPreset};
use agri_core::weather::WeatherSnapshot;
use chrono::Utc;
use log::{debug, info, warn};

/// In-memory state for one dashboard session.
pub struct AppStore<S> {
    storage: S,
    account: Option<AccountId>,
    profile: FarmerProfile,
    stats: Stats,
    weather: WeatherSnapshot,
    activities: Vec<Activity>,
    notifications: Vec<Notification>,
    ids: IdGenerator,
}

impl<S: ProfileStorage> AppStore<S> {
    /// Create a disconnected store at defaults, holding the welcome
    /// notification.
    pub fn new(storage: S) -> Self {
        let mut store = Self {
            storage,
            account: None,
            profile: FarmerProfile::default(),
            stats: Stats::default(),
            weather: WeatherSnapshot::default(),
            activities: Vec::new(),
            notifications: Vec::new(),
            ids: IdGenerator::new(),
        };
        store.add_notification(NewNotification::welcome());
        store
    }

    // ─── Reads ───

    pub fn profile(&self) -> &FarmerProfile {
        &self.profile
    }

    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    pub fn weather(&self) -> &WeatherSnapshot {
        &self.weather
    }

    /// Activity log, newest first.
    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    /// Notifications, newest first.
    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn account(&self) -> Option<&AccountId> {
        self.account.as_ref()
    }

    pub fn is_connected(&self) -> bool {
        self.account.is_some()
    }

    pub fn unread_count(&self) -> usize {
        self.notifications.iter().filter(|n| !n.read).count()
    }

    /// True iff an account is connected and its farmer NFT exists.
    pub fn is_registered(&self) -> bool {
        self.is_connected() && self.profile.nft_created
    }

    // ─── Account lifecycle ───

    /// Connect `account` and load its persisted profile.
    pub fn connect(&mut self, account: AccountId) {
        self.load_for_account(Some(account));
    }

    /// Forget the connected account. In-memory state is kept, but
    /// [`is_registered`](Self::is_registered) reports false until the next
    /// connect.
    pub fn disconnect(&mut self) {
        if let Some(account) = self.account.take() {
            info!("Disconnected {}", account);
        }
    }

    /// Switch to `account` (or to no account) and load its profile.
    ///
    /// Profile, stats and activities reset to defaults first. A valid
    /// snapshot is then merged over the default profile; if it records a
    /// registration, stats jump to the returning-farmer preset and the
    /// activity log is seeded with the registration entry. Missing,
    /// unreadable or invalid snapshots leave the defaults in place.
    pub fn load_for_account(&mut self, account: Option<AccountId>) {
        self.account = account;
        self.profile = FarmerProfile::default();
        self.stats = Stats::default();
        self.activities.clear();

        let Some(account) = self.account.clone() else {
            debug!("No account connected; using default profile");
            return;
        };

        let key = account.storage_key();
        let raw = match self.storage.get(&key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!("No saved profile under {}", key);
                return;
            }
            Err(e) => {
                warn!("Failed to read {}: {:#}", key, e);
                return;
            }
        };

        let snapshot = match ProfileSnapshot::parse(&raw) {
            Ok(snapshot) => snapshot,
            Err(e) => {
                warn!("Ignoring invalid profile snapshot under {}: {}", key, e);
                return;
            }
        };

        let now = Utc::now();
        self.profile = FarmerProfile::from_snapshot(snapshot, now);
        info!("Loaded saved profile for {}", account);

        if self.profile.nft_created {
            self.stats = StatsPreset::ReturningFarmer.stats();
            let date = self
                .profile
                .registration_date
                .unwrap_or(now)
                .date_naive();
            let id = self.ids.next_id();
            self.activities
                .push(NewActivity::registration().into_activity(id, date));
        }
    }

    // ─── Mutations ───

    /// Shallow-merge `patch` into the profile and persist it if an account
    /// is connected.
    pub fn update_profile(&mut self, patch: ProfilePatch) {
        self.profile.apply(patch);
        self.persist_profile();
    }

    /// Merge `patch`, mark the farmer registered and persist; reset stats to
    /// the new-registration preset, and log the activity and notification.
    ///
    /// Returns the completed profile, which callers submit to the backend.
    pub fn complete_registration(&mut self, patch: ProfilePatch) -> FarmerProfile {
        self.profile.apply(patch);
        self.profile.mark_registered(Utc::now());
        self.persist_profile();

        self.stats = StatsPreset::NewRegistration.stats();
        self.add_activity(NewActivity::registration());
        self.add_notification(NewNotification::registration_complete());

        info!("Registration completed for {:?}", self.profile.name);
        self.profile.clone()
    }

    pub fn update_stats(&mut self, patch: StatsPatch) {
        self.stats.apply(patch);
    }

    /// Prepend an activity dated today. The log is not capped.
    pub fn add_activity(&mut self, activity: NewActivity) -> RecordId {
        let id = self.ids.next_id();
        let date = agri_utils::dates::today();
        self.activities.insert(0, activity.into_activity(id, date));
        id
    }

    /// Prepend an unread notification stamped now. The list is not capped.
    pub fn add_notification(&mut self, notification: NewNotification) -> RecordId {
        let id = self.ids.next_id();
        self.notifications
            .insert(0, notification.into_notification(id, Utc::now()));
        id
    }

    /// Mark the notification `id` read. Returns false if there is none.
    pub fn mark_notification_read(&mut self, id: RecordId) -> bool {
        match self.notifications.iter_mut().find(|n| n.id == id) {
            Some(notification) => {
                notification.read = true;
                true
            }
            None => false,
        }
    }

    fn persist_profile(&self) {
        let Some(account) = self.account.as_ref() else {
            debug!("No account connected; profile not persisted");
            return;
        };
        let key = account.storage_key();
        let result = serde_json::to_string(&self.profile)
            .map_err(anyhow::Error::from)
            .and_then(|json| self.storage.set(&key, &json));
        if let Err(e) = result {
            warn!("Failed to persist profile under {}: {:#}", key, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agri_core::activity::{ActivityKind, ActivityStatus};
    use agri_core::notification::NotificationKind;
    use agri_core::profile::KycStatus;
    use chrono::NaiveDate;

    const ADDR: &str = "0x52908400098527886e0f7030069857d2e4169ee7";
    const OTHER: &str = "0xde0b295669a9fd93d5f28d9ec85e40f4cb697bae";

    fn account(raw: &str) -> AccountId {
        AccountId::parse(raw).unwrap()
    }

    fn patch_name(name: &str) -> ProfilePatch {
        ProfilePatch {
            name: Some(name.to_string()),
            ..Default::default()
        }
    }

    fn stored_profile(storage: &MemoryStorage, raw: &str) -> FarmerProfile {
        let json = storage.get(&account(raw).storage_key()).unwrap().unwrap();
        serde_json::from_str(&json).unwrap()
    }

    /// Memory storage that counts `set` calls.
    #[derive(Clone, Default)]
    struct CountingStorage {
        inner: MemoryStorage,
        writes: std::rc::Rc<std::cell::Cell<usize>>,
    }

    impl ProfileStorage for CountingStorage {
        fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
            self.inner.get(key)
        }

        fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
            self.writes.set(self.writes.get() + 1);
            self.inner.set(key, value)
        }
    }

    struct FailingStorage;

    impl ProfileStorage for FailingStorage {
        fn get(&self, _key: &str) -> anyhow::Result<Option<String>> {
            anyhow::bail!("storage disabled")
        }

        fn set(&self, _key: &str, _value: &str) -> anyhow::Result<()> {
            anyhow::bail!("quota exceeded")
        }
    }

    #[test]
    fn new_store_is_at_defaults() {
        let store = AppStore::new(MemoryStorage::new());
        assert!(!store.is_connected());
        assert!(!store.is_registered());
        assert_eq!(store.stats(), &Stats::default());
        assert!(store.activities().is_empty());
        assert_eq!(store.notifications().len(), 1);
        assert_eq!(store.notifications()[0].title, "Welcome to AgriChain");
        assert_eq!(store.unread_count(), 1);
        assert_eq!(store.weather(), &WeatherSnapshot::default());
    }

    #[test]
    fn profile_updates_fold_and_persist_final_value() {
        let storage = MemoryStorage::new();
        let mut store = AppStore::new(storage.clone());
        store.connect(account(ADDR));

        let patches = vec![
            patch_name("Asha"),
            ProfilePatch {
                farm_size: Some("2ha".to_string()),
                crop_type: Some("Maize".to_string()),
                ..Default::default()
            },
            ProfilePatch {
                crop_type: Some("Sorghum".to_string()),
                profile_image: Some(Some("asha.png".to_string())),
                ..Default::default()
            },
        ];

        let mut expected = store.profile().clone();
        for patch in patches {
            expected.apply(patch.clone());
            store.update_profile(patch);
        }

        assert_eq!(store.profile(), &expected);
        assert_eq!(store.profile().crop_type, "Sorghum");
        assert_eq!(store.profile().farm_size, "2ha");
        assert_eq!(stored_profile(&storage, ADDR), expected);
        assert_eq!(storage.len(), 1);
    }

    #[test]
    fn update_without_account_merges_but_does_not_persist() {
        let storage = MemoryStorage::new();
        let mut store = AppStore::new(storage.clone());

        store.update_profile(patch_name("Asha"));

        assert_eq!(store.profile().name, "Asha");
        assert!(storage.is_empty());
    }

    #[test]
    fn complete_registration_forces_registered_fields() {
        let storage = MemoryStorage::new();
        let mut store = AppStore::new(storage.clone());
        store.connect(account(ADDR));

        let completed = store.complete_registration(patch_name("Asha"));

        assert!(completed.nft_created);
        assert_eq!(completed.kyc_status, KycStatus::Verified);
        assert!(completed.registration_date.is_some());
        assert!(completed.is_consistent());
        assert!(store.is_registered());
        assert_eq!(store.stats(), &StatsPreset::NewRegistration.stats());
        assert_eq!(stored_profile(&storage, ADDR), completed);

        let activities = store.activities();
        assert_eq!(activities.len(), 1);
        assert_eq!(activities[0].kind, ActivityKind::Registration);
        assert_eq!(activities[0].status, ActivityStatus::Completed);
        assert_eq!(activities[0].amount, 0.0);

        let latest = &store.notifications()[0];
        assert_eq!(latest.kind, NotificationKind::Success);
        assert_eq!(latest.title, "Registration Complete!");
        assert!(!latest.read);
    }

    #[test]
    fn registration_is_not_reported_after_disconnect() {
        let mut store = AppStore::new(MemoryStorage::new());
        store.connect(account(ADDR));
        store.complete_registration(ProfilePatch::default());
        assert!(store.is_registered());

        store.disconnect();

        assert!(store.profile().nft_created);
        assert!(!store.is_registered());
    }

    #[test]
    fn mark_read_touches_only_the_target() {
        let mut store = AppStore::new(MemoryStorage::new());
        let before = store.notifications().to_vec();

        let id = store.add_notification(NewNotification::new(
            NotificationKind::Warning,
            "Rain expected",
            "Heavy rain forecast for Day 3",
        ));
        assert!(store.mark_notification_read(id));

        let read: Vec<_> = store.notifications().iter().filter(|n| n.read).collect();
        assert_eq!(read.len(), 1);
        assert_eq!(read[0].id, id);
        assert_eq!(&store.notifications()[1..], &before[..]);
    }

    #[test]
    fn mark_read_unknown_id_is_noop() {
        let mut store = AppStore::new(MemoryStorage::new());
        let before = store.notifications().to_vec();
        assert!(!store.mark_notification_read(RecordId::new(999)));
        assert_eq!(store.notifications(), &before[..]);
    }

    #[test]
    fn activities_and_notifications_are_newest_first_with_unique_ids() {
        let mut store = AppStore::new(MemoryStorage::new());
        let first = store.add_activity(NewActivity {
            kind: ActivityKind::Loan,
            description: "Seed loan".to_string(),
            amount: 300.0,
            status: ActivityStatus::Pending,
        });
        let second = store.add_activity(NewActivity {
            kind: ActivityKind::Insurance,
            description: "Drought cover".to_string(),
            amount: 45.0,
            status: ActivityStatus::Completed,
        });

        assert_ne!(first, second);
        assert_eq!(store.activities()[0].id, second);
        assert_eq!(store.activities()[1].id, first);
        assert_eq!(store.activities()[0].date, agri_utils::dates::today());

        let n = store.add_notification(NewNotification::registration_complete());
        assert_eq!(store.notifications()[0].id, n);
        assert!(store.notifications().iter().all(|x| x.id != first && x.id != second));
    }

    #[test]
    fn update_stats_merges_without_persisting() {
        let storage = MemoryStorage::new();
        let mut store = AppStore::new(storage.clone());
        store.connect(account(ADDR));

        store.update_stats(StatsPatch {
            carbon_credits: Some(12),
            ..Default::default()
        });

        assert_eq!(store.stats().carbon_credits, 12);
        assert_eq!(store.stats().credit_score, 650);
        assert!(storage.is_empty());
    }

    #[test]
    fn loading_registered_snapshot_seeds_stats_and_activity() {
        let storage = MemoryStorage::new();
        storage
            .set(
                &account(ADDR).storage_key(),
                r#"{"name":"Asha","nftCreated":true,"kycStatus":"Verified",
                    "registrationDate":"2024-03-01T09:30:00.000Z"}"#,
            )
            .unwrap();

        let mut store = AppStore::new(storage);
        store.connect(account(ADDR));

        assert_eq!(store.profile().name, "Asha");
        assert!(store.is_registered());
        assert_eq!(store.stats(), &StatsPreset::ReturningFarmer.stats());
        assert_eq!(store.activities().len(), 1);
        assert_eq!(
            store.activities()[0].date,
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
        );
    }

    #[test]
    fn registered_snapshot_without_date_is_dated_today() {
        let storage = MemoryStorage::new();
        storage
            .set(&account(ADDR).storage_key(), r#"{"nftCreated":true}"#)
            .unwrap();

        let mut store = AppStore::new(storage);
        store.connect(account(ADDR));

        assert!(store.profile().is_consistent());
        assert_eq!(store.activities().len(), 1);
        assert_eq!(store.activities()[0].date, Utc::now().date_naive());
    }

    #[test]
    fn loading_unregistered_snapshot_keeps_default_stats() {
        let storage = MemoryStorage::new();
        storage
            .set(
                &account(ADDR).storage_key(),
                r#"{"name":"Asha","nftCreated":false}"#,
            )
            .unwrap();

        let mut store = AppStore::new(storage);
        store.connect(account(ADDR));

        assert_eq!(store.profile().name, "Asha");
        assert!(!store.is_registered());
        assert_eq!(store.stats(), &Stats::default());
        assert!(store.activities().is_empty());
    }

    #[test]
    fn malformed_snapshot_leaves_defaults() {
        for raw in ["{not json", r#"{"nftCreated":"true"}"#, r#"{"unknownKey":1}"#] {
            let storage = MemoryStorage::new();
            storage.set(&account(ADDR).storage_key(), raw).unwrap();

            let mut store = AppStore::new(storage);
            store.connect(account(ADDR));

            assert_eq!(store.profile().name, "");
            assert!(!store.profile().nft_created, "snapshot {raw:?}");
            assert_eq!(store.stats(), &Stats::default());
            assert!(store.activities().is_empty());
            assert!(store.is_connected());
        }
    }

    #[test]
    fn switching_accounts_does_not_leak_profiles() {
        let storage = MemoryStorage::new();
        let mut store = AppStore::new(storage.clone());

        store.connect(account(ADDR));
        store.complete_registration(patch_name("Asha"));

        store.connect(account(OTHER));
        assert_eq!(store.profile().name, "");
        assert!(!store.is_registered());
        assert!(store.activities().is_empty());

        store.connect(account(ADDR));
        assert_eq!(store.profile().name, "Asha");
        assert!(store.is_registered());
        assert_eq!(storage.len(), 1);
    }

    #[test]
    fn load_without_account_stays_at_defaults() {
        let mut store = AppStore::new(MemoryStorage::new());
        store.update_profile(patch_name("Asha"));
        store.load_for_account(None);
        assert_eq!(store.profile().name, "");
        assert!(!store.is_connected());
    }

    #[test]
    fn every_profile_update_writes_storage_once() {
        let storage = CountingStorage::default();
        let mut store = AppStore::new(storage.clone());
        store.connect(account(ADDR));
        assert_eq!(storage.writes.get(), 0);

        store.update_profile(patch_name("Asha"));
        store.update_profile(patch_name("Asha"));
        store.update_profile(ProfilePatch::default());
        assert_eq!(storage.writes.get(), 3);

        store.update_stats(StatsPatch {
            carbon_credits: Some(10),
            ..Default::default()
        });
        store.add_activity(NewActivity::registration());
        let id = store.add_notification(NewNotification::welcome());
        store.mark_notification_read(id);
        assert_eq!(storage.writes.get(), 3);

        store.complete_registration(ProfilePatch::default());
        assert_eq!(storage.writes.get(), 4);
    }

    #[test]
    fn storage_failures_keep_in_memory_state() {
        let mut store = AppStore::new(FailingStorage);
        store.connect(account(ADDR));
        assert!(store.is_connected());

        store.update_profile(patch_name("Asha"));
        assert_eq!(store.profile().name, "Asha");

        store.complete_registration(ProfilePatch::default());
        assert!(store.is_registered());
        assert_eq!(store.stats(), &StatsPreset::NewRegistration.stats());
    }
}
