//! Core of the Folio portfolio page: the effect components, the contact and
//! visitor relays, preferences and configuration. Nothing here depends on a
//! UI toolkit; the shell drives every component with plain calls.

pub mod animation;
pub mod constants;
pub mod contact;
pub mod content;
pub mod effects;
pub mod preferences;
pub mod relay;
pub mod utils;

pub use animation::{FrameLoop, Spring, Teardown};
pub use contact::{ContactForm, Toast, ToastKind, ToastSlot};
pub use effects::{
    AnchorRect, ConfettiBurst, DrawList, ElementBounds, ParticleField, PointerTiltTransform,
    ScrollSectionTracker, ScrollState, SectionAnchors, Surface, TextReveal, TiltRotation,
    TiltVector, ViewportMetrics,
};
pub use preferences::{FileStore, MemoryStore, PreferenceStore, ThemeMode, ThemePreference};
pub use relay::{
    ClientDetails, EmailJsRelay, EmailRelay, GeoInfo, GeoLocator, IpApiLocator, NotifyOutcome,
    TemplateParams, VisitorNotifier,
};
pub use utils::config::Config;
pub use utils::error::{FolioError, FolioResult, RelayError, ResultExt, StoreError, ValidationError};
