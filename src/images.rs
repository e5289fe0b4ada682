/*
 * Copyright 2021 Constantin A. <emoji.builder@c1710.de>
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */
//! Sprite image path resolution and the best-effort preloader.
//!
//! Preloading warms an in-memory byte cache so the first picker render does
//! not wait on disk. It is fire-and-forget: failures are counted and
//! logged, never propagated.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{Duration, Instant};

use futures::stream::{self, StreamExt};

use crate::index::emoji_index::EmojiIndex;

/// Where the Apple 64 px sprite set lives relative to the asset root.
const DEFAULT_IMAGE_ROOT: &str = "img/apple/64";

/// How many sprite loads run at once
pub const PRELOAD_CONCURRENCY: usize = 10;

/// A single sprite load is abandoned after this long
pub const IMAGE_TIMEOUT: Duration = Duration::from_secs(5);

/// Resolves sprite file names (as stored in the dataset) to file paths.
#[derive(Debug, Clone)]
pub struct ImageLocator {
    root: PathBuf,
}

impl ImageLocator {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        ImageLocator { root: root.into() }
    }

    /// The path of a sprite file under this locator's root.
    /// # Examples
    /// ```
    /// use std::path::PathBuf;
    /// use emoji_index::images::ImageLocator;
    ///
    /// let locator = ImageLocator::new("assets/emoji");
    /// assert_eq!(locator.path_for("1f914.png"), PathBuf::from("assets/emoji/1f914.png"));
    /// ```
    pub fn path_for(&self, image: &str) -> PathBuf {
        self.root.join(image)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl Default for ImageLocator {
    fn default() -> Self {
        ImageLocator::new(DEFAULT_IMAGE_ROOT)
    }
}

/// What a preload run did. Purely informational; preloading never fails
/// as a whole.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct PreloadSummary {
    pub loaded: usize,
    pub failed: usize,
}

/// Loads sprite bitmaps into memory with bounded concurrency.
///
/// The cache keeps the bytes alive for the process lifetime (or until the
/// preloader is dropped), which is all the "preloading" the UI layer needs.
#[derive(Debug)]
pub struct SpritePreloader {
    locator: ImageLocator,
    cache: Mutex<HashMap<String, Vec<u8>>>,
}

impl SpritePreloader {
    pub fn new(locator: ImageLocator) -> Self {
        SpritePreloader {
            locator,
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Reads every sprite the index knows into the cache, at most
    /// [PRELOAD_CONCURRENCY] files at a time, each bounded by
    /// [IMAGE_TIMEOUT]. Best effort: missing or slow files are skipped.
    pub async fn preload(&self, index: &EmojiIndex) -> PreloadSummary {
        let images = index.sprite_images();
        info!("preloading {} emoji sprites", images.len());
        let start = Instant::now();

        let mut summary = PreloadSummary {
            loaded: 0,
            failed: 0,
        };
        let mut loads = stream::iter(images.into_iter().map(|image| self.load(image)))
            .buffer_unordered(PRELOAD_CONCURRENCY);
        while let Some(loaded) = loads.next().await {
            if loaded {
                summary.loaded += 1;
            } else {
                summary.failed += 1;
            }
        }

        info!(
            "done preloading emoji sprites in {}ms ({} loaded, {} failed)",
            start.elapsed().as_millis(),
            summary.loaded,
            summary.failed
        );
        summary
    }

    async fn load(&self, image: &str) -> bool {
        let path = self.locator.path_for(image);
        let read = tokio::time::timeout(IMAGE_TIMEOUT, tokio::fs::read(&path)).await;
        match read {
            Ok(Ok(bytes)) => {
                let mut cache = self.cache.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
                cache.insert(image.to_owned(), bytes);
                true
            }
            Ok(Err(error)) => {
                debug!("failed to preload {}: {}", path.display(), error);
                false
            }
            Err(_) => {
                warn!("timed out preloading {}", path.display());
                false
            }
        }
    }

    /// The cached bytes for a sprite file name, if preloading got to it.
    pub fn get(&self, image: &str) -> Option<Vec<u8>> {
        let cache = self.cache.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        cache.get(image).cloned()
    }

    /// The number of cached sprites
    pub fn len(&self) -> usize {
        let cache = self.cache.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        cache.len()
    }

    /// Whether nothing has been preloaded yet
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for SpritePreloader {
    fn default() -> Self {
        SpritePreloader::new(ImageLocator::default())
    }
}
