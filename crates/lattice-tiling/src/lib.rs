pub mod error;
pub mod layout;
pub mod navigation;
pub mod pane;
pub mod stack;
pub mod sync;
pub mod tab;
pub mod tree;
pub mod workspace;

pub use error::TilingError;
pub use layout::{LayoutEngine, LayoutSnapshot};
pub use navigation::{find_neighbor, GeometryProvider, PaneRect};
pub use pane::{Pane, BLANK_URI};
pub use stack::StackView;
pub use sync::{SyncedGeometry, WidgetSync};
pub use tab::{Tab, TabList};
pub use tree::{NodeId, NodeKind, NodeSnapshot, PaneNode, PaneTree};
pub use workspace::{
    CloseOutcome, ConsumeOutcome, NavOutcome, ResizeOutcome, SplitOutcome, StackMove, StackOutcome,
    TreeDelta, Workspace, WorkspaceSettings,
};
