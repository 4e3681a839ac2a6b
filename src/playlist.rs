//! Flattens the catalog into songs and the sectioned sidebar listing.

use crate::catalog::Catalog;
use crate::config::MediaTemplate;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Song {
    pub title: String,
    pub file: String,
    pub cover: String,
    pub lyrics: Option<String>,
}

impl Song {
    pub fn from_template(title: &str, media: &MediaTemplate) -> Self {
        Self {
            title: title.to_string(),
            file: media.media_url(title),
            cover: media.cover_url(title),
            lyrics: media.lyrics_path(title),
        }
    }
}

/// One sidebar row. `index` is the song's position in [`Playlist::songs`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistEntry {
    pub index: usize,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistSection {
    pub name: String,
    pub entries: Vec<PlaylistEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Playlist {
    songs: Vec<Song>,
    sections: Vec<PlaylistSection>,
}

impl Playlist {
    /// Category order first, then title order inside each category.
    pub fn build(catalog: &Catalog, media: &MediaTemplate) -> Self {
        let mut songs = Vec::with_capacity(catalog.song_count());
        let mut sections = Vec::with_capacity(catalog.len());

        for category in catalog.categories() {
            let mut entries = Vec::with_capacity(category.titles.len());
            for title in &category.titles {
                entries.push(PlaylistEntry {
                    index: songs.len(),
                    title: title.clone(),
                });
                songs.push(Song::from_template(title, media));
            }
            sections.push(PlaylistSection {
                name: category.name.clone(),
                entries,
            });
        }

        Self { songs, sections }
    }

    #[cfg(test)]
    pub fn songs(&self) -> &[Song] {
        &self.songs
    }

    pub fn sections(&self) -> &[PlaylistSection] {
        &self.sections
    }

    pub fn get(&self, index: usize) -> Option<&Song> {
        self.songs.get(index)
    }

    pub fn len(&self) -> usize {
        self.songs.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    /// Rows in document order, the same order the sidebar renders them.
    #[cfg(test)]
    pub fn entries(&self) -> impl Iterator<Item = &PlaylistEntry> {
        self.sections.iter().flat_map(|section| section.entries.iter())
    }

    /// Wraps any index into `[0, len)`. `None` for an empty playlist.
    pub fn wrap(&self, index: usize) -> Option<usize> {
        if self.songs.is_empty() {
            None
        } else {
            Some(index % self.songs.len())
        }
    }
}
