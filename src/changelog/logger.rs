//! Change-event logger
//!
//! Turns entity lifecycle notifications into human-readable records and
//! appends them to `logs/<date>/<Type>/<Type>-<date>.log`.
//!
//! Each notification reads the clock once and opens one sink, so every
//! record it produces (separators and a failure's error record included)
//! shares one timestamp and one file. With a trigger level above the event
//! level, a notification's records stay buffered and only reach the file if
//! the notification fails.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, FixedOffset};
use serde_json::json;
use tracing::{debug, warn};

use crate::clock::{Clock, SystemClock};
use crate::config::paths::is_path_segment;
use crate::config::{LogPaths, Settings};
use crate::error::{error_chain, ChangeLogError, ChangeLogResult};
use crate::policy::ErrorPolicy;
use crate::sink::{open_event_sink, EventSink, LogRecord, Severity, Sink};

use super::context::{is_completion, OperationContext};
use super::entity::Entity;
use super::lifecycle::{Capabilities, EntityDescriptor, LifecyclePhase};
use super::payload::{compact, pretty, restrict_to_dirty};

/// Logs entity lifecycle notifications to per-type, per-day files
pub struct ModelChangeLogger {
    paths: LogPaths,
    settings: Settings,
    clock: Arc<dyn Clock>,
    policy: ErrorPolicy,
    /// Registered type names and the phases logged for each
    registry: HashMap<String, Capabilities>,
}

impl ModelChangeLogger {
    /// Create a logger writing beneath `paths` with the given settings
    pub fn new(paths: LogPaths, settings: Settings) -> ChangeLogResult<Self> {
        settings.validate()?;
        Ok(Self {
            paths,
            settings,
            clock: Arc::new(SystemClock),
            policy: ErrorPolicy::Suppress,
            registry: HashMap::new(),
        })
    }

    /// Create a logger from the environment and the optional settings file
    pub fn from_env() -> ChangeLogResult<Self> {
        let paths = LogPaths::new()?;
        let settings = Settings::load_or_default(&paths)?;
        Self::new(paths, settings)
    }

    /// Replace the time source
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    /// Choose what hooks do with a failure after logging it
    ///
    /// Defaults to [`ErrorPolicy::Suppress`]: a logging failure never fails
    /// the host's operation.
    pub fn with_error_policy(mut self, policy: ErrorPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Subscribe to an entity type's lifecycle phases
    ///
    /// Registering a type again replaces its capabilities.
    ///
    /// # Errors
    ///
    /// Returns an error if the type name cannot be used as a directory name.
    pub fn register(&mut self, descriptor: EntityDescriptor) -> ChangeLogResult<&mut Self> {
        if !is_path_segment(&descriptor.type_name) {
            return Err(ChangeLogError::Config(format!(
                "invalid entity type name: {:?}",
                descriptor.type_name
            )));
        }

        debug!(entity = %descriptor.type_name, "registered entity type");
        self.registry
            .insert(descriptor.type_name, descriptor.capabilities);
        Ok(self)
    }

    /// Subscribe to several entity types, stopping at the first invalid one
    pub fn register_all(
        &mut self,
        descriptors: impl IntoIterator<Item = EntityDescriptor>,
    ) -> ChangeLogResult<&mut Self> {
        for descriptor in descriptors {
            self.register(descriptor)?;
        }
        Ok(self)
    }

    /// Whether `dispatch` logs `phase` for `type_name`
    pub fn is_subscribed(&self, type_name: &str, phase: LifecyclePhase) -> bool {
        self.registry
            .get(type_name)
            .is_some_and(|caps| caps.contains(phase))
    }

    /// Registered type names, sorted
    pub fn registered_types(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.registry.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn paths(&self) -> &LogPaths {
        &self.paths
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Route a host notification to the matching phase hook
    ///
    /// Notifications for unregistered types or disabled phases are ignored.
    pub fn dispatch(
        &self,
        phase: LifecyclePhase,
        entity: &dyn Entity,
        ctx: &mut OperationContext,
    ) -> ChangeLogResult<()> {
        if !self.is_subscribed(entity.type_name(), phase) {
            return Ok(());
        }

        match phase {
            LifecyclePhase::Creating => self.before_create(entity, ctx),
            LifecyclePhase::Created => self.after_create(entity, ctx),
            LifecyclePhase::Updating => self.before_update(entity, ctx),
            LifecyclePhase::Updated => self.after_update(entity, ctx),
            LifecyclePhase::Deleting => self.before_delete(entity, ctx),
            LifecyclePhase::Deleted => self.after_delete(entity, ctx),
        }
    }

    /// Log the changed fields' old and new values
    pub fn before_update(&self, entity: &dyn Entity, ctx: &mut OperationContext) -> ChangeLogResult<()> {
        self.guarded(entity, ctx, |emitter, entity| {
            let original = entity.original()?;
            let dirty = entity.dirty()?;
            let old_values = restrict_to_dirty(&original, &dirty);
            emitter.event(&format!("updating. Old values: {}", compact(&old_values)?))?;

            let new_values = restrict_to_dirty(&entity.attributes()?, &dirty);
            emitter.event(&format!("New values: {}", compact(&new_values)?))
        })
    }

    pub fn after_update(&self, entity: &dyn Entity, ctx: &mut OperationContext) -> ChangeLogResult<()> {
        self.guarded(entity, ctx, |emitter, _| emitter.event("has been updated."))
    }

    /// Log the full attribute set of the entity about to be created
    pub fn before_create(&self, entity: &dyn Entity, ctx: &mut OperationContext) -> ChangeLogResult<()> {
        self.guarded(entity, ctx, |emitter, entity| {
            let attributes = entity.attributes()?;
            emitter.event(&format!(
                "is being created with data: {}.",
                pretty(&attributes)?
            ))
        })
    }

    pub fn after_create(&self, entity: &dyn Entity, ctx: &mut OperationContext) -> ChangeLogResult<()> {
        self.guarded(entity, ctx, |emitter, _| emitter.event("has been created."))
    }

    pub fn before_delete(&self, entity: &dyn Entity, ctx: &mut OperationContext) -> ChangeLogResult<()> {
        self.guarded(entity, ctx, |emitter, _| emitter.event("is being deleted."))
    }

    pub fn after_delete(&self, entity: &dyn Entity, ctx: &mut OperationContext) -> ChangeLogResult<()> {
        self.guarded(entity, ctx, |emitter, _| emitter.event("has been deleted."))
    }

    /// Run one hook body, logging and resolving any failure it returns
    fn guarded<F>(&self, entity: &dyn Entity, ctx: &mut OperationContext, body: F) -> ChangeLogResult<()>
    where
        F: FnOnce(&mut Emitter<'_>, &dyn Entity) -> ChangeLogResult<()>,
    {
        let type_name = entity.type_name();
        let now = self.clock.now();
        let date = now.format(&self.settings.date_format).to_string();

        // A name that cannot be a directory has no file to hold an error record
        let path = match self.paths.entity_log(type_name, &date) {
            Ok(path) => path,
            Err(err) => {
                warn!(entity = type_name, error = %err, "entity type has no log file");
                return self.policy.resolve(err);
            }
        };

        let settings = &self.settings;
        let mut emitter = Emitter {
            settings,
            ctx,
            type_name,
            now,
            sink: open_event_sink(
                path,
                settings.event_level,
                settings.trigger(),
                settings.buffer_limit,
            ),
        };

        match body(&mut emitter, entity) {
            Ok(()) => Ok(()),
            Err(err) => {
                emitter.error(&err);
                self.policy.resolve(err)
            }
        }
    }
}

/// Writes the records of one lifecycle notification through one sink
struct Emitter<'a> {
    settings: &'a Settings,
    ctx: &'a mut OperationContext,
    type_name: &'a str,
    now: DateTime<FixedOffset>,
    sink: EventSink,
}

impl Emitter<'_> {
    /// Write `"<Type> model <text>"`, with separators around completions
    fn event(&mut self, text: &str) -> ChangeLogResult<()> {
        let settings = self.settings;

        if self.ctx.follows_completion() {
            let separator = self.record(settings.event_level, &settings.separator);
            self.sink.write(separator)?;
        }

        let message = format!("{} model {}", self.type_name, text);
        let record = self.record(settings.event_level, &message);
        self.sink.write(record)?;
        self.ctx.remember(&message);

        if is_completion(&message) {
            let separator = self.record(settings.event_level, &settings.separator);
            self.sink.write(separator)?;
        }

        Ok(())
    }

    /// Write one error record for `err`, flushing whatever is buffered
    ///
    /// A failure here has nowhere left to go but the diagnostics stream.
    fn error(&mut self, err: &ChangeLogError) {
        let record = self
            .record(self.settings.error_level, &format!("Error: {}", err))
            .with_context(
                "exception",
                json!({
                    "message": err.to_string(),
                    "trace": error_chain(err),
                }),
            );

        if let Err(write_err) = self.sink.write(record) {
            warn!(
                entity = self.type_name,
                error = %err,
                write_error = %write_err,
                "failed to write change-log error record"
            );
        }
    }

    fn record(&self, severity: Severity, message: &str) -> LogRecord {
        LogRecord::new(self.now, &self.settings.channel, severity, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::changelog::entity::{EntitySnapshot, SerdeEntity};
    use crate::changelog::payload::{into_attributes, Attributes};
    use crate::clock::FixedClock;
    use serde_json::{json, Value};
    use std::path::PathBuf;
    use std::sync::Mutex;
    use tempfile::TempDir;

    const DAY: &str = "2024-03-15";

    fn attrs(value: Value) -> Attributes {
        into_attributes(value, "Test", "fixture").unwrap()
    }

    fn create_test_logger() -> (ModelChangeLogger, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let logger = ModelChangeLogger::new(
            LogPaths::with_base_dir(temp_dir.path()),
            Settings::default(),
        )
        .unwrap()
        .with_clock(FixedClock::parse("2024-03-15T10:30:00+00:00").unwrap());
        (logger, temp_dir)
    }

    fn log_path(logger: &ModelChangeLogger, type_name: &str) -> PathBuf {
        logger.paths().entity_log(type_name, DAY).unwrap()
    }

    /// Defers every record until a notification fails
    fn create_buffered_logger(buffer_limit: usize) -> (ModelChangeLogger, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let settings = Settings {
            trigger_level: Some(Severity::Error),
            buffer_limit,
            ..Settings::default()
        };
        let logger = ModelChangeLogger::new(LogPaths::with_base_dir(temp_dir.path()), settings)
            .unwrap()
            .with_clock(FixedClock::parse("2024-03-15T10:30:00+00:00").unwrap());
        (logger, temp_dir)
    }

    /// Advances one hour on every reading
    struct SteppingClock(Mutex<DateTime<FixedOffset>>);

    impl Clock for SteppingClock {
        fn now(&self) -> DateTime<FixedOffset> {
            let mut current = self.0.lock().unwrap();
            let now = *current;
            *current = now + chrono::Duration::hours(1);
            now
        }
    }

    /// Messages of every line, with the "[datetime] channel.LEVEL: " prefix stripped
    fn messages(path: &PathBuf) -> Vec<String> {
        let contents = std::fs::read_to_string(path).unwrap();
        contents
            .split("\n[")
            .map(|entry| {
                let entry = entry.trim_end_matches('\n');
                let (_, rest) = entry.split_once("] ").unwrap();
                let (_, message) = rest.split_once(": ").unwrap();
                message.to_string()
            })
            .collect()
    }

    /// Reads always fail
    struct BrokenEntity;

    impl Entity for BrokenEntity {
        fn type_name(&self) -> &str {
            "Broken"
        }

        fn attributes(&self) -> ChangeLogResult<Attributes> {
            Err(ChangeLogError::Entity("attributes unavailable".into()))
        }

        fn original(&self) -> ChangeLogResult<Attributes> {
            Err(ChangeLogError::Entity("original unavailable".into()))
        }
    }

    /// Loaded state reads fine, current state does not
    struct StaleLedger;

    impl Entity for StaleLedger {
        fn type_name(&self) -> &str {
            "Ledger"
        }

        fn attributes(&self) -> ChangeLogResult<Attributes> {
            Err(ChangeLogError::Entity("current state unavailable".into()))
        }

        fn original(&self) -> ChangeLogResult<Attributes> {
            Ok(attrs(json!({"balance": 100, "owner": "Ann"})))
        }

        fn dirty(&self) -> ChangeLogResult<Attributes> {
            Ok(attrs(json!({"balance": 150})))
        }
    }

    #[test]
    fn test_before_create_writes_pretty_attributes() {
        let (logger, _temp) = create_test_logger();
        let order = EntitySnapshot::new("Order", attrs(json!({"id": 1, "status": "new"})));
        let mut ctx = OperationContext::new();

        logger.before_create(&order, &mut ctx).unwrap();

        assert_eq!(
            messages(&log_path(&logger, "Order")),
            vec!["Order model is being created with data: {\n  \"id\": 1,\n  \"status\": \"new\"\n}."]
        );
    }

    #[test]
    fn test_create_sequence_with_separator() {
        let (logger, _temp) = create_test_logger();
        let order = EntitySnapshot::new("Order", attrs(json!({"id": 1, "status": "new"})));
        let mut ctx = OperationContext::new();

        logger.before_create(&order, &mut ctx).unwrap();
        logger.after_create(&order, &mut ctx).unwrap();

        let lines = messages(&log_path(&logger, "Order"));
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "Order model has been created.");
        assert_eq!(lines[2], "-".repeat(50));
    }

    #[test]
    fn test_consecutive_completions_are_flanked() {
        let (logger, _temp) = create_test_logger();
        let user = EntitySnapshot::new("User", attrs(json!({"id": 7})));
        let mut ctx = OperationContext::new();

        logger.after_update(&user, &mut ctx).unwrap();
        logger.after_delete(&user, &mut ctx).unwrap();

        let separator = "-".repeat(50);
        assert_eq!(
            messages(&log_path(&logger, "User")),
            vec![
                "User model has been updated.".to_string(),
                separator.clone(),
                separator.clone(),
                "User model has been deleted.".to_string(),
                separator,
            ]
        );
    }

    #[test]
    fn test_separator_state_is_per_context() {
        let (logger, _temp) = create_test_logger();
        let user = EntitySnapshot::new("User", attrs(json!({"id": 7})));

        logger.after_update(&user, &mut OperationContext::new()).unwrap();
        logger.before_delete(&user, &mut OperationContext::new()).unwrap();

        let lines = messages(&log_path(&logger, "User"));
        assert_eq!(lines.last().unwrap(), "User model is being deleted.");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_before_update_restricts_old_values() {
        let (logger, _temp) = create_test_logger();
        let user = EntitySnapshot::changed(
            "User",
            attrs(json!({"name": "Ann", "email": "a@x.io", "age": 30})),
            attrs(json!({"name": "Ann", "email": "b@x.io", "age": 30, "nick": "an"})),
        );
        let mut ctx = OperationContext::new();

        logger.before_update(&user, &mut ctx).unwrap();

        assert_eq!(
            messages(&log_path(&logger, "User")),
            vec![
                "User model updating. Old values: {\"email\":\"a@x.io\"}",
                "User model New values: {\"email\":\"b@x.io\",\"nick\":\"an\"}",
            ]
        );
    }

    #[test]
    fn test_delete_messages_have_no_payload() {
        let (logger, _temp) = create_test_logger();
        let user = EntitySnapshot::new("User", attrs(json!({"secret": "hunter2"})));
        let mut ctx = OperationContext::new();

        logger.before_delete(&user, &mut ctx).unwrap();
        logger.after_delete(&user, &mut ctx).unwrap();

        let contents = std::fs::read_to_string(log_path(&logger, "User")).unwrap();
        assert!(contents.contains("User model is being deleted."));
        assert!(contents.contains("User model has been deleted."));
        assert!(!contents.contains("hunter2"));
    }

    #[test]
    fn test_read_failure_is_logged_and_suppressed() {
        let (logger, _temp) = create_test_logger();
        let mut ctx = OperationContext::new();

        let result = logger.before_update(&BrokenEntity, &mut ctx);

        assert!(result.is_ok());
        let contents = std::fs::read_to_string(log_path(&logger, "Broken")).unwrap();
        assert_eq!(contents.matches("ModelLogger.ERROR:").count(), 1);
        assert!(contents.contains("Error: Entity error: original unavailable"));
        assert!(contents.contains("\"trace\":[\"Entity error: original unavailable\"]"));
        assert!(!contents.contains("ModelLogger.INFO"));
        assert!(ctx.last_message().is_none());
    }

    #[test]
    fn test_serialization_failure_is_logged_and_suppressed() {
        let (logger, _temp) = create_test_logger();
        let mut grid: HashMap<(u8, u8), u8> = HashMap::new();
        grid.insert((0, 0), 1);
        let entity = SerdeEntity::new("Grid", &grid);
        let mut ctx = OperationContext::new();

        assert!(logger.before_create(&entity, &mut ctx).is_ok());

        let contents = std::fs::read_to_string(log_path(&logger, "Grid")).unwrap();
        assert_eq!(contents.matches("ModelLogger.ERROR: Error: JSON error:").count(), 1);
    }

    #[test]
    fn test_forward_policy_returns_error() {
        let (logger, _temp) = create_test_logger();
        let logger = logger.with_error_policy(ErrorPolicy::Forward);

        let err = logger
            .before_create(&BrokenEntity, &mut OperationContext::new())
            .unwrap_err();

        assert!(matches!(err, ChangeLogError::Entity(_)));
        assert!(log_path(&logger, "Broken").exists());
    }

    #[test]
    fn test_unwritable_storage_never_fails_the_hook() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("blocker");
        std::fs::write(&blocker, "file, not directory").unwrap();
        let logger = ModelChangeLogger::new(LogPaths::with_base_dir(&blocker), Settings::default())
            .unwrap();
        let user = EntitySnapshot::new("User", attrs(json!({"id": 1})));
        let mut ctx = OperationContext::new();

        assert!(logger.after_create(&user, &mut ctx).is_ok());
        // The completion never reached a file, so nothing may follow it with a separator
        assert!(ctx.last_message().is_none());
    }

    #[test]
    fn test_dispatch_respects_registration() {
        let (mut logger, _temp) = create_test_logger();
        logger
            .register(
                EntityDescriptor::new("User")
                    .with_capabilities(Capabilities::ALL.without(LifecyclePhase::Created)),
            )
            .unwrap();
        let user = EntitySnapshot::new("User", attrs(json!({"id": 1})));
        let order = EntitySnapshot::new("Order", attrs(json!({"id": 2})));
        let mut ctx = OperationContext::new();

        logger.dispatch(LifecyclePhase::Created, &user, &mut ctx).unwrap();
        logger.dispatch(LifecyclePhase::Deleting, &user, &mut ctx).unwrap();
        logger.dispatch(LifecyclePhase::Deleting, &order, &mut ctx).unwrap();

        assert_eq!(
            messages(&log_path(&logger, "User")),
            vec!["User model is being deleted."]
        );
        assert!(!log_path(&logger, "Order").exists());
    }

    #[test]
    fn test_register_all_and_listing() {
        let (mut logger, _temp) = create_test_logger();
        logger
            .register_all(["User", "Order"].map(EntityDescriptor::new))
            .unwrap();

        assert_eq!(logger.registered_types(), vec!["Order", "User"]);
        assert!(logger.is_subscribed("Order", LifecyclePhase::Updating));
        assert!(!logger.is_subscribed("Invoice", LifecyclePhase::Updating));
    }

    #[test]
    fn test_invalid_settings_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let settings = Settings {
            channel: String::new(),
            ..Settings::default()
        };

        assert!(ModelChangeLogger::new(LogPaths::with_base_dir(temp_dir.path()), settings).is_err());
    }

    #[test]
    fn test_register_rejects_path_like_names() {
        let (mut logger, _temp) = create_test_logger();

        for name in ["Admin/User", "..", ""] {
            let err = logger.register(EntityDescriptor::new(name)).err().unwrap();
            assert!(matches!(err, ChangeLogError::Config(_)));
        }
        assert!(logger.registered_types().is_empty());
    }

    #[test]
    fn test_path_like_type_name_writes_nothing() {
        let (logger, temp) = create_test_logger();
        let entity = EntitySnapshot::new("../../escape", attrs(json!({"id": 1})));

        assert!(logger.after_create(&entity, &mut OperationContext::new()).is_ok());
        assert!(!temp.path().join("logs").exists());
        assert!(!temp.path().join("escape").exists());

        let logger = logger.with_error_policy(ErrorPolicy::Forward);
        let err = logger
            .after_create(&entity, &mut OperationContext::new())
            .unwrap_err();
        assert!(matches!(err, ChangeLogError::Entity(_)));
    }

    #[test]
    fn test_before_update_with_explicit_dirty_set() {
        let (logger, _temp) = create_test_logger();
        // The host only reports `role` as changed
        let user = EntitySnapshot::new("User", attrs(json!({"name": "Ann", "role": "admin", "age": 31})))
            .with_original(attrs(json!({"name": "Ann", "role": "staff", "age": 30})))
            .with_dirty(attrs(json!({"role": "admin"})));
        let mut ctx = OperationContext::new();

        logger.before_update(&user, &mut ctx).unwrap();

        assert_eq!(
            messages(&log_path(&logger, "User")),
            vec![
                "User model updating. Old values: {\"role\":\"staff\"}",
                "User model New values: {\"role\":\"admin\"}",
            ]
        );
    }

    #[test]
    fn test_error_trigger_holds_back_successful_notifications() {
        let (logger, _temp) = create_buffered_logger(0);
        let user = EntitySnapshot::changed(
            "User",
            attrs(json!({"email": "a@x.io"})),
            attrs(json!({"email": "b@x.io"})),
        );
        let mut ctx = OperationContext::new();

        logger.before_update(&user, &mut ctx).unwrap();
        logger.after_update(&user, &mut ctx).unwrap();

        assert!(!log_path(&logger, "User").exists());
        assert_eq!(ctx.last_message(), Some("User model has been updated."));
    }

    #[test]
    fn test_error_trigger_flushes_the_failing_notification() {
        let (logger, _temp) = create_buffered_logger(0);
        let mut ctx = OperationContext::new();

        assert!(logger.before_update(&StaleLedger, &mut ctx).is_ok());

        let lines = messages(&log_path(&logger, "Ledger"));
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "Ledger model updating. Old values: {\"balance\":100}");
        assert!(lines[1].starts_with("Error: Entity error: current state unavailable"));

        let contents = std::fs::read_to_string(log_path(&logger, "Ledger")).unwrap();
        assert_eq!(contents.matches("ModelLogger.INFO:").count(), 1);
        assert_eq!(contents.matches("ModelLogger.ERROR:").count(), 1);
        assert!(!contents.contains("New values"));
    }

    #[test]
    fn test_error_trigger_respects_buffer_limit() {
        let (logger, _temp) = create_buffered_logger(1);

        assert!(logger
            .before_update(&StaleLedger, &mut OperationContext::new())
            .is_ok());

        let lines = messages(&log_path(&logger, "Ledger"));
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("Error: Entity error: current state unavailable"));
    }

    #[test]
    fn test_one_timestamp_per_notification() {
        let temp_dir = TempDir::new().unwrap();
        let start = DateTime::parse_from_rfc3339("2024-03-15T23:30:00+00:00").unwrap();
        let logger = ModelChangeLogger::new(
            LogPaths::with_base_dir(temp_dir.path()),
            Settings::default(),
        )
        .unwrap()
        .with_clock(SteppingClock(Mutex::new(start)));
        let user = EntitySnapshot::changed(
            "User",
            attrs(json!({"email": "a@x.io"})),
            attrs(json!({"email": "b@x.io"})),
        );
        let mut ctx = OperationContext::new();

        logger.before_update(&user, &mut ctx).unwrap();

        let next_day = logger.paths().entity_log("User", "2024-03-16").unwrap();
        assert_eq!(messages(&log_path(&logger, "User")).len(), 2);
        assert!(!next_day.exists());

        logger.after_update(&user, &mut ctx).unwrap();

        assert_eq!(messages(&log_path(&logger, "User")).len(), 2);
        assert_eq!(
            messages(&next_day),
            vec!["User model has been updated.".to_string(), "-".repeat(50)]
        );
    }
}
