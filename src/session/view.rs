use super::state::Session;
use crate::models::Song;
use std::fmt;

/// Main screen: the current recommendation (if any) and what can be done
/// with it
pub struct HomeView<'a> {
    session: &'a Session,
}

impl<'a> HomeView<'a> {
    pub fn new(session: &'a Session) -> Self {
        HomeView { session }
    }
}

impl fmt::Display for HomeView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Beats ===")?;

        if !self.session.pending_favorites_text.is_empty() {
            writeln!(f, "Favorites: {}", self.session.pending_favorites_text)?;
        }

        match &self.session.current_recommendation {
            Some(rec) => {
                writeln!(f, "\nRecommendation:")?;
                writeln!(f, "  {} by {}", rec.title, rec.artist)?;
                writeln!(f, "  Listen: {}", rec.embed_link)?;
                writeln!(f, "\n[like] [dislike]")?;
            }
            None if self.session.stopped => {
                writeln!(f, "\nRecommendations stopped.")?;
            }
            None => {
                writeln!(
                    f,
                    "\nEnter your favorite songs, separated by commas: favorites <song, song, ...>"
                )?;
            }
        }

        write!(f, "\n[stop] [songs: {} liked]", self.session.liked_songs.len())
    }
}

/// "Your Songs": liked songs in the order they were liked
pub struct LikedSongsView<'a> {
    songs: &'a [Song],
}

impl<'a> LikedSongsView<'a> {
    pub fn new(songs: &'a [Song]) -> Self {
        LikedSongsView { songs }
    }
}

impl fmt::Display for LikedSongsView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Your Songs ===")?;
        writeln!(f, "Liked Songs:")?;
        if self.songs.is_empty() {
            writeln!(f, "  (nothing liked yet)")?;
        }
        for (i, song) in self.songs.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, song)?;
        }
        write!(f, "\n[back] to recommendations")
    }
}
