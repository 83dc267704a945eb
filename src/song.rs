//! The value record stored in a [`Playlist`](crate::Playlist).
//!
//! A [`Song`] has two identity fields (`name`, `artist`) fixed at construction and two
//! attribute fields (`genre`, `duration`) that can be changed in place.  Equality and
//! hashing look at the identity fields only, so retagging a song's genre never changes
//! whether two songs are "the same song".

use crate::playlist::Playable;
use core::fmt;
use core::hash::{Hash, Hasher};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum Genre {
    Pop,
    Rock,
    HipHop,
    Country,
    Jazz,
    Disco,
}

impl Genre {
    pub const ALL: [Genre; 6] = [
        Genre::Pop,
        Genre::Rock,
        Genre::HipHop,
        Genre::Country,
        Genre::Jazz,
        Genre::Disco,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Genre::Pop => "POP",
            Genre::Rock => "ROCK",
            Genre::HipHop => "HIP_HOP",
            Genre::Country => "COUNTRY",
            Genre::Jazz => "JAZZ",
            Genre::Disco => "DISCO",
        }
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Renders a number of seconds as `m:ss` (minutes unpadded, seconds zero-padded).
pub fn format_duration(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

/// A playable track.  `Clone` yields a fully independent copy.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Song {
    name: String,
    artist: String,
    genre: Genre,
    duration: u32,
}

impl Song {
    /// `duration` is in seconds.
    pub fn new(
        name: impl Into<String>,
        artist: impl Into<String>,
        genre: Genre,
        duration: u32,
    ) -> Self {
        Self {
            name: name.into(),
            artist: artist.into(),
            genre,
            duration,
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn artist(&self) -> &str {
        &self.artist
    }

    #[inline]
    pub fn genre(&self) -> Genre {
        self.genre
    }

    #[inline]
    pub fn duration(&self) -> u32 {
        self.duration
    }

    pub fn set_genre(&mut self, genre: Genre) {
        self.genre = genre;
    }

    pub fn set_duration(&mut self, duration: u32) {
        self.duration = duration;
    }
}

impl PartialEq for Song {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.artist == other.artist
    }
}

impl Eq for Song {}

impl Hash for Song {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.artist.hash(state);
    }
}

impl Playable for Song {
    type Category = Genre;

    fn name(&self) -> &str {
        &self.name
    }
    fn artist(&self) -> &str {
        &self.artist
    }
    fn category(&self) -> &Genre {
        &self.genre
    }
    fn duration(&self) -> u32 {
        self.duration
    }
}

impl fmt::Display for Song {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}, {}, {}",
            self.name,
            self.artist,
            self.genre,
            format_duration(self.duration)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fnv::FnvHasher;

    fn fnv_hash<T: Hash>(value: &T) -> u64 {
        let mut hasher = FnvHasher::default();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_song_display_format() {
        let song = Song::new("Thriller", "MJ", Genre::Pop, 358);
        assert_eq!(song.to_string(), "Thriller, MJ, POP, 5:58");

        let short = Song::new("Intro", "Band", Genre::HipHop, 65);
        assert_eq!(short.to_string(), "Intro, Band, HIP_HOP, 1:05");
    }

    #[test]
    fn test_song_format_duration_edges() {
        assert_eq!(format_duration(0), "0:00");
        assert_eq!(format_duration(59), "0:59");
        assert_eq!(format_duration(60), "1:00");
        assert_eq!(format_duration(3600), "60:00");
    }

    #[test]
    fn test_song_equality_identity_only() {
        let a = Song::new("Hey Jude", "Beatles", Genre::Rock, 431);
        let mut b = Song::new("Hey Jude", "Beatles", Genre::Pop, 10);
        assert_eq!(a, b);
        assert_eq!(fnv_hash(&a), fnv_hash(&b));

        b.set_genre(Genre::Disco);
        b.set_duration(999);
        assert_eq!(a, b);

        let c = Song::new("Hey Jude", "Wilson Pickett", Genre::Rock, 431);
        assert_ne!(a, c);
    }

    #[test]
    fn test_song_clone_is_independent() {
        let original = Song::new("Jolene", "Dolly Parton", Genre::Country, 162);
        let mut copy = original.clone();
        copy.set_duration(1);
        copy.set_genre(Genre::Jazz);
        assert_eq!(original.duration(), 162);
        assert_eq!(original.genre(), Genre::Country);
        assert_eq!(copy.name(), "Jolene");
        assert_eq!(copy.artist(), "Dolly Parton");
    }

    #[test]
    fn test_song_genre_display_all() {
        let names: Vec<_> = Genre::ALL.iter().map(ToString::to_string).collect();
        assert_eq!(names, ["POP", "ROCK", "HIP_HOP", "COUNTRY", "JAZZ", "DISCO"]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_song_serde_round_trip() {
        let song = Song::new("So What", "Miles Davis", Genre::Jazz, 562);
        let json = serde_json::to_string(&song).unwrap();
        assert!(json.contains("\"JAZZ\""));
        let back: Song = serde_json::from_str(&json).unwrap();
        assert_eq!(back, song);
        assert_eq!(back.duration(), 562);
    }
}
