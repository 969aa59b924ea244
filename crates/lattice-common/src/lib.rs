pub mod actions;
pub mod errors;
pub mod events;
pub mod id;
pub mod notifications;
pub mod surface;
pub mod types;
pub mod ui_loop;

pub use actions::{Action, StackStep};
pub use errors::{ConfigError, ContentError, LatticeError};
pub use events::{Event, EventBus};
pub use id::{new_correlation_id, new_id, new_pane_id, new_tab_id};
pub use notifications::{Notification, NotificationLevel, NotificationQueue};
pub use surface::{
    ContainerKind, ContentProvider, HeadlessContent, HeadlessWidget, HeadlessWidgets,
    SurfaceHandle, TickControl, TickId, WidgetFactory, WidgetHandle,
};
pub use types::{Direction, Orientation, PaneId, Rect, Size, TabId};
pub use ui_loop::{UiPoster, UiQueue, UiTask};

pub type Result<T> = std::result::Result<T, LatticeError>;
