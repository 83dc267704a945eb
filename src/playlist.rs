//! Unique-membership song collection with a filterable, orderable snapshot view.
//!
//! A [`Playlist`] stores its members in insertion order.  Filters and the scanning
//! order live in a separate [`PlaylistView`] and never touch the stored members: each
//! call to [`Playlist::iter`] applies the current view to the current members and
//! returns an owned [`Snapshot`].  Later changes to the playlist do not reach a snapshot
//! that was already taken.
//!
//! # Filters
//! | Filter | Unset value | A member passes when |
//! |--------|-------------|----------------------|
//! | artist | `None` | its artist equals the filter |
//! | genre | `None` | its category equals the filter |
//! | max duration | `u32::MAX` | its duration is `<=` the bound |
//!
//! Filters combine conjunctively.  Sorting is stable, so members with equal sort keys
//! keep their insertion order.

use crate::error::{CollectionError, Result};
use crate::song::Song;
use core::fmt;
use core::hash::{Hash, Hasher};
use fnv::{FnvHashSet, FnvHasher};
use tracing::{debug, trace};

/// Accessors a playlist needs to filter and order its members.
pub trait Playable {
    type Category: PartialEq + Clone + fmt::Debug;

    fn name(&self) -> &str;
    fn artist(&self) -> &str;
    fn category(&self) -> &Self::Category;
    fn duration(&self) -> u32;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScanningOrder {
    /// The order members were added in.
    #[default]
    InsertionOrder,
    /// Ascending by name.
    ByName,
    /// Ascending by duration.
    ByDuration,
}

/// Filter and order settings applied when a playlist is iterated.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlaylistView<C> {
    pub artist: Option<String>,
    pub genre: Option<C>,
    pub max_duration: u32,
    pub order: ScanningOrder,
}

impl<C> Default for PlaylistView<C> {
    fn default() -> Self {
        Self {
            artist: None,
            genre: None,
            max_duration: u32::MAX,
            order: ScanningOrder::InsertionOrder,
        }
    }
}

impl<C: PartialEq> PlaylistView<C> {
    /// Returns `true` if `item` passes every active filter.
    pub fn admits<T>(&self, item: &T) -> bool
    where
        T: Playable<Category = C>,
    {
        self.artist.as_deref().map_or(true, |artist| item.artist() == artist)
            && self.genre.as_ref().map_or(true, |genre| item.category() == genre)
            && item.duration() <= self.max_duration
    }

    /// Returns `true` if no filter is active.
    pub fn is_unfiltered(&self) -> bool {
        self.artist.is_none() && self.genre.is_none() && self.max_duration == u32::MAX
    }
}

/// A collection whose iteration can be narrowed by filters.
pub trait FilteredIterable {
    type Category;

    /// `None` clears the artist filter.
    fn filter_artist(&mut self, artist: Option<&str>);
    /// `None` clears the genre filter.
    fn filter_genre(&mut self, genre: Option<Self::Category>);
    /// Inclusive upper bound on duration; `u32::MAX` means no limit.
    fn filter_duration(&mut self, max_duration: u32);
}

/// A collection whose iteration order can be selected.
pub trait OrderedIterable {
    fn set_scanning_order(&mut self, order: ScanningOrder);
    fn scanning_order(&self) -> ScanningOrder;
}

/// An insertion-ordered collection of unique members.
///
/// Uniqueness is enforced by [`add`](Playlist::add) only; a playlist built with
/// `From<Vec<T>>` keeps the vector as given.
///
/// # Equality and hashing
/// Two playlists are equal when they have the same length and the same set of distinct
/// members, regardless of order or view settings.  The hash is the wrapping sum of the
/// FNV hashes of the distinct members, which agrees with that equality.
///
/// # Cloning
/// `Clone` deep-copies every member and carries the view settings over.
pub struct Playlist<T: Playable = Song> {
    songs: Vec<T>,
    view: PlaylistView<T::Category>,
}

impl<T: Playable> Playlist<T> {
    pub fn new() -> Self {
        Self {
            songs: Vec::new(),
            view: PlaylistView::default(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.songs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    /// Members in insertion order, ignoring the view.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.songs
    }

    pub fn view(&self) -> &PlaylistView<T::Category> {
        &self.view
    }

    pub fn set_view(&mut self, view: PlaylistView<T::Category>) {
        self.view = view;
    }

    /// Clears all three filters. The scanning order is kept.
    pub fn clear_filters(&mut self) {
        self.view = PlaylistView {
            order: self.view.order,
            ..PlaylistView::default()
        };
    }

    /// Members passing the view, in view order.
    fn visible(&self) -> Vec<&T> {
        let mut visible: Vec<&T> = self
            .songs
            .iter()
            .filter(|song| self.view.admits(*song))
            .collect();
        match self.view.order {
            ScanningOrder::InsertionOrder => {}
            ScanningOrder::ByName => visible.sort_by(|a, b| a.name().cmp(b.name())),
            ScanningOrder::ByDuration => visible.sort_by_key(|song| song.duration()),
        }
        trace!(
            stored = self.songs.len(),
            visible = visible.len(),
            order = ?self.view.order,
            "computed playlist view"
        );
        visible
    }
}

impl<T: Playable + PartialEq> Playlist<T> {
    pub fn contains(&self, value: &T) -> bool {
        self.songs.contains(value)
    }

    /// Appends `value`.
    ///
    /// Fails with [`CollectionError::DuplicateValue`] if an equal member is present.
    pub fn add(&mut self, value: T) -> Result<()> {
        if self.contains(&value) {
            debug!(
                name = value.name(),
                artist = value.artist(),
                "rejected duplicate playlist entry"
            );
            return Err(CollectionError::DuplicateValue);
        }
        self.songs.push(value);
        Ok(())
    }

    /// Removes the first member equal to `value`. Returns `true` if one was removed.
    pub fn remove(&mut self, value: &T) -> bool {
        match self.songs.iter().position(|song| song == value) {
            Some(idx) => {
                self.songs.remove(idx);
                true
            }
            None => false,
        }
    }
}

impl<T: Playable + Clone> Playlist<T> {
    /// Takes a snapshot of the members passing the current view, in view order.
    pub fn iter(&self) -> Snapshot<T> {
        Snapshot {
            inner: self
                .visible()
                .into_iter()
                .cloned()
                .collect::<Vec<_>>()
                .into_iter(),
        }
    }
}

impl<T: Playable> FilteredIterable for Playlist<T> {
    type Category = T::Category;

    fn filter_artist(&mut self, artist: Option<&str>) {
        self.view.artist = artist.map(str::to_owned);
    }

    fn filter_genre(&mut self, genre: Option<T::Category>) {
        self.view.genre = genre;
    }

    fn filter_duration(&mut self, max_duration: u32) {
        self.view.max_duration = max_duration;
    }
}

impl<T: Playable> OrderedIterable for Playlist<T> {
    fn set_scanning_order(&mut self, order: ScanningOrder) {
        self.view.order = order;
    }

    fn scanning_order(&self) -> ScanningOrder {
        self.view.order
    }
}

// --- Traits ---

impl<T: Playable> Default for Playlist<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Playable> From<Vec<T>> for Playlist<T> {
    fn from(songs: Vec<T>) -> Self {
        Self {
            songs,
            view: PlaylistView::default(),
        }
    }
}

/// Collects members as given; duplicates are kept, like `From<Vec<T>>`.
impl<T: Playable> FromIterator<T> for Playlist<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<T: Playable + Clone> Clone for Playlist<T> {
    fn clone(&self) -> Self {
        Self {
            songs: self.songs.clone(),
            view: self.view.clone(),
        }
    }
}

impl<T: Playable + fmt::Debug> fmt::Debug for Playlist<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Playlist")
            .field("songs", &self.songs)
            .field("view", &self.view)
            .finish()
    }
}

impl<T: Playable + PartialEq> PartialEq for Playlist<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self.songs.iter().all(|song| other.contains(song))
            && other.songs.iter().all(|song| self.contains(song))
    }
}

impl<T: Playable + Eq> Eq for Playlist<T> {}

impl<T: Playable + Eq + Hash> Hash for Playlist<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let distinct: FnvHashSet<&T> = self.songs.iter().collect();
        let sum = distinct.into_iter().fold(0u64, |acc, song| {
            let mut hasher = FnvHasher::default();
            song.hash(&mut hasher);
            acc.wrapping_add(hasher.finish())
        });
        state.write_u64(sum);
    }
}

/// Renders the members passing the view, in view order: `[(a), (b)]`, or `[]`.
impl<T: Playable + fmt::Display> fmt::Display for Playlist<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (idx, song) in self.visible().into_iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            write!(f, "({})", song)?;
        }
        f.write_str("]")
    }
}

impl<'a, T: Playable + Clone> IntoIterator for &'a Playlist<T> {
    type Item = T;
    type IntoIter = Snapshot<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An owned, already filtered and ordered sequence taken from a [`Playlist`].
#[derive(Debug, Clone)]
pub struct Snapshot<T> {
    inner: std::vec::IntoIter<T>,
}

impl<T> Snapshot<T> {
    /// The members not yet yielded.
    pub fn as_slice(&self) -> &[T] {
        self.inner.as_slice()
    }
}

impl<T> Iterator for Snapshot<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for Snapshot<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for Snapshot<T> {}
