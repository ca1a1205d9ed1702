//! Native backend interfaces
//!
//! The thin surface each adaptor needs from its OS subsystem. Hosts inject
//! real implementations (X11 calls, D-Bus proxies, TSF COM wrappers); tests
//! inject fakes. Methods take `&self` because backends are shared `Rc`s in a
//! single-threaded model; implementations use interior mutability.

/// One installed XKB layout group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XkbLayoutInfo {
    /// XKB group number; switching groups changes the key mapping
    pub group: u32,
    /// Display name
    pub name: String,
    /// Layout code, e.g. "us" or "de"
    pub layout: String,
    /// Layout variant, e.g. "intl"
    pub variant: Option<String>,
    /// Language tag for the layout
    pub locale: String,
}

/// X11/XKB keyboard configuration.
pub trait XkbBackend {
    fn is_available(&self) -> bool;

    /// Installed layout groups, in group order.
    fn layouts(&self) -> Vec<XkbLayoutInfo>;

    /// Switches the active layout group. Returns whether the server
    /// accepted the change.
    fn set_group(&self, group: u32) -> bool;
}

/// One engine reported by an engine-based subsystem (IBus, TSF, Keyman).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineInfo {
    /// Stable identifier used to activate the engine (IBus longname, TSF
    /// profile id, Keyman keyboard id)
    pub longname: String,
    /// Display name
    pub name: String,
    /// Language tag the engine declares
    pub language: String,
    /// Keyboard layout the engine declares, e.g. "us" for engines that sit
    /// on top of a latin layout
    pub layout: String,
}

/// Engine-based keyboard subsystem (IBus daemon, Windows TSF, Keyman).
pub trait EngineBackend {
    /// Whether the subsystem is reachable (daemon running, API present).
    fn is_available(&self) -> bool;

    /// Installed engines, in the subsystem's preference order.
    fn engines(&self) -> Vec<EngineInfo>;

    /// Makes `longname` the subsystem's active engine.
    fn activate_engine(&self, longname: &str) -> bool;

    /// Clears the subsystem's active engine.
    fn deactivate_engine(&self) -> bool {
        true
    }
}
