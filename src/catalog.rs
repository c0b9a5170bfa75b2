use std::{
    fmt,
    path::{Path, PathBuf},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TrackId(pub u32);

impl fmt::Display for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    pub id: TrackId,
    pub title: String,
    pub artist: String,
    pub audio_url: String,
    pub image_url: String,
}

impl Track {
    pub fn new(
        id: u32,
        title: impl Into<String>,
        artist: impl Into<String>,
        audio_url: impl Into<String>,
        image_url: impl Into<String>,
    ) -> Self {
        Self {
            id: TrackId(id),
            title: title.into(),
            artist: artist.into(),
            audio_url: audio_url.into(),
            image_url: image_url.into(),
        }
    }

    /// Resolves the site-absolute audio URL against a local media root.
    pub fn audio_path(&self, media_root: &Path) -> PathBuf {
        media_root.join(self.audio_url.trim_start_matches('/'))
    }

    pub fn image_name(&self) -> &str {
        self.image_url
            .rsplit('/')
            .next()
            .unwrap_or(self.image_url.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Forward,
    Backward,
}

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    tracks: Vec<Track>,
}

impl Catalog {
    pub fn new(tracks: Vec<Track>) -> Self {
        Self { tracks }
    }

    pub fn builtin() -> Self {
        Self::new(vec![
            Track::new(
                1,
                "Hale Dil",
                "Murder 2 - Harshit Saxena",
                "/audio/Hale Dil.mp3",
                "/images/hale-dil.jpg",
            ),
            Track::new(
                2,
                "Phir Mohabbat",
                "Murder 2 - Arijit Singh",
                "/audio/Phir Mohabbat.mp3",
                "/images/phir-mohabbat.jpg",
            ),
            Track::new(
                3,
                "Sultan",
                "Ravi Basrur",
                "/audio/Sultan.mp3",
                "/images/sultan.jpg",
            ),
        ])
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn get(&self, id: TrackId) -> Option<&Track> {
        self.tracks.iter().find(|t| t.id == id)
    }

    pub fn at(&self, index: usize) -> Option<&Track> {
        self.tracks.get(index)
    }

    pub fn position(&self, id: TrackId) -> Option<usize> {
        self.tracks.iter().position(|t| t.id == id)
    }

    /// The track one step away from `id`, wrapping around both ends.
    pub fn neighbor(&self, id: TrackId, step: Step) -> Option<&Track> {
        let len = self.tracks.len();
        let index = self.position(id)?;
        let target = match step {
            Step::Forward => (index + 1) % len,
            Step::Backward => (index + len - 1) % len,
        };
        self.tracks.get(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn numbered(count: u32) -> Catalog {
        Catalog::new(
            (1..=count)
                .map(|i| Track::new(i, format!("t{i}"), "a", format!("/audio/{i}.mp3"), ""))
                .collect(),
        )
    }

    #[test]
    fn builtin_has_three_songs_in_order() {
        let catalog = Catalog::builtin();
        let ids: Vec<_> = catalog.tracks().iter().map(|t| t.id.0).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn neighbor_wraps_at_both_ends() {
        let catalog = numbered(3);
        assert_eq!(
            catalog.neighbor(TrackId(3), Step::Forward).map(|t| t.id),
            Some(TrackId(1))
        );
        assert_eq!(
            catalog.neighbor(TrackId(1), Step::Backward).map(|t| t.id),
            Some(TrackId(3))
        );
    }

    #[test]
    fn neighbor_of_single_track_is_itself() {
        let catalog = numbered(1);
        assert_eq!(
            catalog.neighbor(TrackId(1), Step::Forward).map(|t| t.id),
            Some(TrackId(1))
        );
    }

    #[test]
    fn neighbor_of_unknown_track_is_none() {
        assert!(numbered(2).neighbor(TrackId(9), Step::Forward).is_none());
        assert!(Catalog::default().neighbor(TrackId(1), Step::Backward).is_none());
    }

    #[test]
    fn audio_path_strips_leading_slash() {
        let catalog = Catalog::builtin();
        let track = &catalog.tracks()[0];
        assert_eq!(
            track.audio_path(Path::new("public")),
            PathBuf::from("public/audio/Hale Dil.mp3")
        );
        assert_eq!(track.image_name(), "hale-dil.jpg");
    }

    proptest! {
        #[test]
        fn forward_and_backward_are_inverse(len in 1u32..40, pick in 0u32..40) {
            let catalog = numbered(len);
            let id = TrackId(pick % len + 1);

            let back = catalog.neighbor(id, Step::Backward).unwrap().id;
            prop_assert_eq!(catalog.neighbor(back, Step::Forward).unwrap().id, id);

            let fwd = catalog.neighbor(id, Step::Forward).unwrap().id;
            prop_assert_eq!(catalog.neighbor(fwd, Step::Backward).unwrap().id, id);
        }
    }
}
