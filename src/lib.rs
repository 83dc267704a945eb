//! # Bounded Playlist
//!
//! Two small in-memory collections with strict, checked invariants.
//!
//! This crate provides `BoundedStack` and `Playlist`.  Neither depends on the other.
//!
//! ## Key Features
//!
//! * **Fixed Capacity:** `BoundedStack` allocates its slots once and rejects a push past
//!   capacity with a typed error instead of growing.
//! * **Deep Cloning:** Cloning either collection duplicates every element; nothing is
//!   shared with the source.  `BoundedStack::try_clone_with` supports fallible copies.
//! * **Non-destructive Views:** `Playlist` filters (artist, genre, max duration) and
//!   scanning order are view settings.  Stored members are never reordered or dropped.
//! * **Snapshot Iteration:** `Playlist::iter` returns an owned, already filtered and
//!   sorted sequence that later mutations cannot disturb.
//! * **Order-Independent Equality:** Two playlists with the same members compare and
//!   hash equal no matter how they were built.
//!
//! ## Errors
//!
//! All operations report failure through [`CollectionError`]:
//!
//! | Variant | Raised by |
//! |---------|-----------|
//! | `InvalidCapacity` | `BoundedStack::new` with a negative capacity |
//! | `CapacityExceeded` | `BoundedStack::push` on a full stack |
//! | `EmptyContainer` | `BoundedStack::pop` / `peek` on an empty stack |
//! | `DuplicateValue` | `Playlist::add` of a member already present |
//!
//! No operation mutates its container before failing.
//!
//! ## Examples
//!
//! ### BoundedStack
//!
//! ```rust
//! use bounded_playlist::{BoundedStack, CollectionError};
//!
//! let mut stack = BoundedStack::new(2).unwrap();
//! stack.push(5).unwrap();
//! stack.push(7).unwrap();
//! assert_eq!(stack.push(9), Err(CollectionError::CapacityExceeded { capacity: 2 }));
//!
//! // Iteration runs top to bottom.
//! assert_eq!(stack.iter().copied().collect::<Vec<_>>(), vec![7, 5]);
//!
//! assert_eq!(stack.pop(), Ok(7));
//! assert_eq!(stack.pop(), Ok(5));
//! assert_eq!(stack.pop(), Err(CollectionError::EmptyContainer));
//! ```
//!
//! ### Playlist
//!
//! ```rust
//! use bounded_playlist::{FilteredIterable, Genre, Playlist, Song};
//!
//! let mut playlist = Playlist::new();
//! playlist.add(Song::new("Hey Jude", "Beatles", Genre::Rock, 431)).unwrap();
//! playlist.add(Song::new("Thriller", "MJ", Genre::Pop, 358)).unwrap();
//!
//! // Adding the same song again is rejected.
//! assert!(playlist.add(Song::new("Thriller", "MJ", Genre::Disco, 1)).is_err());
//!
//! playlist.filter_duration(400);
//! let snapshot: Vec<Song> = playlist.iter().collect();
//! assert_eq!(snapshot.len(), 1);
//! assert_eq!(playlist.to_string(), "[(Thriller, MJ, POP, 5:58)]");
//!
//! // The filter is a view setting; both songs are still stored.
//! assert_eq!(playlist.len(), 2);
//! ```
//!
//! ### Ordering
//!
//! ```rust
//! use bounded_playlist::{Genre, OrderedIterable, Playlist, ScanningOrder, Song};
//!
//! let mut playlist = Playlist::new();
//! playlist.add(Song::new("B-side", "X", Genre::Jazz, 200)).unwrap();
//! playlist.add(Song::new("A-side", "Y", Genre::Jazz, 100)).unwrap();
//!
//! playlist.set_scanning_order(ScanningOrder::ByName);
//! let names: Vec<String> = playlist.iter().map(|s| s.name().to_owned()).collect();
//! assert_eq!(names, ["A-side", "B-side"]);
//! ```

// --- Module Declarations ---

pub mod error;
pub mod playlist;
pub mod song;
pub mod stack;

// --- Re-exports ---

pub use error::{CollectionError, Result};
pub use playlist::{
    FilteredIterable, OrderedIterable, Playable, Playlist, PlaylistView, ScanningOrder, Snapshot,
};
pub use song::{Genre, Song, format_duration};
pub use stack::{AnyStack, BoundedStack, StackIter};
