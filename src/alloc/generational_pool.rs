//! `GenerationalPool` — an object pool with generational indices.
//!
//! Prevents ABA problems by checking generations on access.
//! Useful when indices are held for long periods and might become stale:
//! a handle to a freed slot never resolves again, even after the slot is
//! reused for a new value.

/// A generational index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GenerationalIndex {
    index: u32,
    generation: u32,
}

impl GenerationalIndex {
    /// Slot position inside the pool.
    pub fn index(&self) -> usize {
        self.index as usize
    }

    /// Generation the slot had when this index was handed out.
    pub fn generation(&self) -> u32 {
        self.generation
    }
}

/// A slot with generation.
#[derive(Debug, Clone)]
enum Slot<T> {
    Occupied { generation: u32, value: T },
    Free { generation: u32, next_free: Option<u32> },
}

/// A generational pool allocator.
#[derive(Debug, Clone)]
pub struct GenerationalPool<T> {
    storage: Vec<Slot<T>>,
    free_head: Option<u32>,
    len: usize,
}

impl<T> GenerationalPool<T> {
    /// Creates an empty pool.
    pub fn new() -> Self {
        Self {
            storage: Vec::new(),
            free_head: None,
            len: 0,
        }
    }

    /// Creates an empty pool with room for `capacity` values.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: Vec::with_capacity(capacity),
            free_head: None,
            len: 0,
        }
    }

    /// Stores `value`, reusing a freed slot when one is available.
    ///
    /// # Panics
    /// Panics if the pool would exceed `u32::MAX` slots.
    pub fn alloc(&mut self, value: T) -> GenerationalIndex {
        self.len += 1;

        if let Some(idx) = self.free_head {
            let slot = &mut self.storage[idx as usize];
            let (generation, next) = match *slot {
                Slot::Free {
                    generation,
                    next_free,
                } => (generation.wrapping_add(1), next_free),
                Slot::Occupied { .. } => unreachable!("free head points to occupied slot"),
            };
            *slot = Slot::Occupied { generation, value };
            self.free_head = next;

            GenerationalIndex {
                index: idx,
                generation,
            }
        } else {
            let idx = u32::try_from(self.storage.len()).expect("generational pool exhausted");
            self.storage.push(Slot::Occupied {
                generation: 0,
                value,
            });

            GenerationalIndex {
                index: idx,
                generation: 0,
            }
        }
    }

    /// Returns the value behind `idx` if it is still live.
    pub fn get(&self, idx: GenerationalIndex) -> Option<&T> {
        match self.storage.get(idx.index())? {
            Slot::Occupied { generation, value } if *generation == idx.generation => Some(value),
            _ => None,
        }
    }

    /// Mutable counterpart of [`get`](Self::get).
    pub fn get_mut(&mut self, idx: GenerationalIndex) -> Option<&mut T> {
        match self.storage.get_mut(idx.index())? {
            Slot::Occupied { generation, value } if *generation == idx.generation => Some(value),
            _ => None,
        }
    }

    /// Returns true if `idx` still refers to a live value.
    pub fn contains(&self, idx: GenerationalIndex) -> bool {
        self.get(idx).is_some()
    }

    /// Frees the slot behind `idx` and returns its value.
    ///
    /// Stale or foreign indices are ignored and yield `None`.
    pub fn free(&mut self, idx: GenerationalIndex) -> Option<T> {
        let slot = self.storage.get_mut(idx.index())?;
        match slot {
            Slot::Occupied { generation, .. } if *generation == idx.generation => {}
            _ => return None,
        }

        let vacated = Slot::Free {
            generation: idx.generation,
            next_free: self.free_head,
        };
        let Slot::Occupied { value, .. } = core::mem::replace(slot, vacated) else {
            unreachable!("slot checked as occupied above");
        };

        self.free_head = Some(idx.index);
        self.len -= 1;
        Some(value)
    }

    /// Drops every value. Previously issued indices stay stale.
    pub fn clear(&mut self) {
        let indices: Vec<_> = self.iter().map(|(idx, _)| idx).collect();
        for idx in indices {
            self.free(idx);
        }
    }

    /// Number of live values.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if no value is live.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Iterates live values in slot order.
    // Slot positions are bounded by the `u32` check in `alloc`.
    #[allow(clippy::cast_possible_truncation)]
    pub fn iter(&self) -> impl Iterator<Item = (GenerationalIndex, &T)> + '_ {
        self.storage.iter().enumerate().filter_map(|(i, slot)| match slot {
            Slot::Occupied { generation, value } => Some((
                GenerationalIndex {
                    index: i as u32,
                    generation: *generation,
                },
                value,
            )),
            Slot::Free { .. } => None,
        })
    }
}

impl<T> Default for GenerationalPool<T> {
    fn default() -> Self {
        Self::new()
    }
}
