//! Development-server port allocation.

use rustc_hash::FxHashMap;

/// Starting cursor shared by default allocators.
pub const DEV_PORT_BASE: u16 = 3000;

/// Table assigning each build target a unique dev-server port.
///
/// Assignment is first-come-first-assigned and stable for the allocator's
/// lifetime; there is no release operation. Uniqueness is guaranteed only
/// within one allocator. Pinned ports bypass the table entirely and are
/// trusted as already unique - nothing detects two targets pinning the
/// same port.
#[derive(Debug, Clone)]
pub struct PortAllocator {
    next: u16,
    assigned: FxHashMap<String, u16>,
}

impl PortAllocator {
    pub fn new() -> Self {
        Self::with_base(DEV_PORT_BASE)
    }

    /// Allocator with an explicit starting cursor.
    pub fn with_base(base: u16) -> Self {
        Self {
            next: base,
            assigned: FxHashMap::default(),
        }
    }

    /// Port for `name`, assigning the next cursor value on first sight.
    ///
    /// A pinned port is returned unchanged without consulting the table.
    pub fn allocate(&mut self, name: &str, pinned: Option<u16>) -> u16 {
        if let Some(port) = pinned {
            return port;
        }
        if let Some(port) = self.assigned.get(name) {
            return *port;
        }
        let port = self.next;
        self.assigned.insert(name.to_string(), port);
        self.next += 1;
        port
    }
}

impl Default for PortAllocator {
    fn default() -> Self {
        Self::new()
    }
}
