use notify_rust::Notification;
#[cfg(all(unix, not(target_os = "macos")))]
use notify_rust::Hint;
use thiserror::Error;
use tracing::debug;

pub const APP_NAME: &str = "202020";

/// Freedesktop sound-theme name played for the default sound.
#[cfg(all(unix, not(target_os = "macos")))]
const XDG_DEFAULT_SOUND: &str = "message-new-instant";

/// Fields of a single OS notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reminder {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub body: &'static str,
    /// Identifier shared by every reminder so a new one replaces the last.
    pub group: &'static str,
    /// Played on macOS and XDG desktops; Windows toasts use their own default.
    pub sound: &'static str,
}

/// The reminder fired at every session boundary
pub const EYE_BREAK: Reminder = Reminder {
    title: "202020",
    subtitle: "Give your eyes a break!",
    body: "Look 20ft away for 20 seconds",
    group: "com.jonashellstrom.202020",
    sound: "Default",
};

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("{0}")]
    Dispatch(#[from] notify_rust::error::Error),
    #[error("notification rejected: {0}")]
    Rejected(String),
}

/// Sink for break reminders
pub trait Notifier {
    fn notify(&mut self, reminder: &Reminder) -> Result<(), NotifyError>;
}

/// Production notifier using the desktop notification service
#[derive(Debug, Default)]
pub struct DesktopNotifier {
    #[cfg(all(unix, not(target_os = "macos")))]
    last_id: Option<u32>,
}

impl DesktopNotifier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Notifier for DesktopNotifier {
    #[cfg(all(unix, not(target_os = "macos")))]
    fn notify(&mut self, reminder: &Reminder) -> Result<(), NotifyError> {
        let handle = build_notification(reminder, self.last_id).show()?;
        self.last_id = Some(handle.id());
        debug!(id = handle.id(), "notification shown");
        Ok(())
    }

    #[cfg(target_os = "macos")]
    fn notify(&mut self, reminder: &Reminder) -> Result<(), NotifyError> {
        Notification::new()
            .appname(APP_NAME)
            .summary(reminder.title)
            .subtitle(reminder.subtitle)
            .body(reminder.body)
            .sound_name(reminder.sound)
            .show()?;
        debug!(group = reminder.group, "notification shown");
        Ok(())
    }

    #[cfg(not(unix))]
    fn notify(&mut self, reminder: &Reminder) -> Result<(), NotifyError> {
        let body = format!("{}\n{}", reminder.subtitle, reminder.body);
        Notification::new()
            .appname(APP_NAME)
            .summary(reminder.title)
            .body(&body)
            .show()?;
        debug!(group = reminder.group, "notification shown");
        Ok(())
    }
}

/// XDG has no subtitle field, so it leads the body. Passing the id of the
/// previous reminder makes the server replace it in place.
#[cfg(all(unix, not(target_os = "macos")))]
fn build_notification(reminder: &Reminder, last_id: Option<u32>) -> Notification {
    let sound = if reminder.sound.eq_ignore_ascii_case("default") {
        XDG_DEFAULT_SOUND
    } else {
        reminder.sound
    };

    let mut notification = Notification::new();
    notification
        .appname(APP_NAME)
        .summary(reminder.title)
        .body(&format!("{}\n{}", reminder.subtitle, reminder.body))
        .hint(Hint::Custom(
            "x-dunst-stack-tag".to_string(),
            reminder.group.to_string(),
        ))
        .hint(Hint::SoundName(sound.to_string()));
    if let Some(id) = last_id {
        notification.id(id);
    }
    notification
}
