//! Core domain for the Reigate Delivers directory: location records, the
//! search/filter engine, delivery-hours summaries, and the shared session
//! state that cards and the modal coordinate through.

pub mod app_config;
pub mod card;
pub mod config;
pub mod context;
pub mod entry;
pub mod error;
pub mod hours;
pub mod search;
pub mod store;

pub use app_config::{AppConfig, Environment};
pub use card::{
    AccordionState, CardLink, CardLinkKind, CardSettings, DirectoryView, LocationCard,
};
pub use config::{load_app_config, load_app_config_from_env};
pub use context::{CoordinationContext, ModalContent, ModalState};
pub use entry::{LocationEntry, LocationId, RawLocationRecord};
pub use error::{ConfigError, IntervalError, RecordError};
pub use hours::{
    parse_interval, summarize, summarize_with_fallback, DeliveryInterval, HOURS_VARY,
};
pub use search::{filter, SearchField, SearchQuery};
pub use store::{load_locations, LoadReport, RecordStore, SkippedRecord};
