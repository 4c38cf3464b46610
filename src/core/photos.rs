use super::sampler::photo_placement;
use glam::Vec3;
use rand::Rng;
use std::collections::VecDeque;

/// A photo ornament hung on the tree.
#[derive(Clone, Debug, PartialEq)]
pub struct PhotoData {
    pub id: String,
    pub url: String,
    pub position: Vec3,
    pub rotation: Vec3,
}

/// The most recent uploads, oldest first.
#[derive(Clone, Debug)]
pub struct PhotoAlbum {
    photos: VecDeque<PhotoData>,
    capacity: usize,
}

impl PhotoAlbum {
    pub fn new(capacity: usize) -> Self {
        Self {
            photos: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn len(&self) -> usize {
        self.photos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PhotoData> {
        self.photos.iter()
    }

    pub fn get(&self, id: &str) -> Option<&PhotoData> {
        self.photos.iter().find(|p| p.id == id)
    }

    pub fn to_vec(&self) -> Vec<PhotoData> {
        self.photos.iter().cloned().collect()
    }

    /// Hangs one photo per URL on a cone of the given shape and returns the
    /// entries evicted to stay within capacity, oldest first.
    pub fn add_batch<R, I>(
        &mut self,
        rng: &mut R,
        urls: I,
        height: f32,
        radius: f32,
    ) -> Vec<PhotoData>
    where
        R: Rng + ?Sized,
        I: IntoIterator<Item = String>,
    {
        for url in urls {
            let placement = photo_placement(rng, height, radius);
            self.photos.push_back(PhotoData {
                id: random_id(rng),
                url,
                position: placement.position,
                rotation: placement.rotation,
            });
        }
        let excess = self.photos.len().saturating_sub(self.capacity);
        self.photos.drain(..excess).collect()
    }
}

/// Short base-36 identifier.
pub fn random_id<R: Rng + ?Sized>(rng: &mut R) -> String {
    const ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    (0..super::constants::PHOTO_ID_LEN)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect()
}
