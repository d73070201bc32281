// SPDX-FileCopyrightText: 2026 AetherGraph contributors
// SPDX-License-Identifier: MIT
//
// This file is part of the AetherGraph canvas core.

//! Node presentation resolution: metadata in, media descriptor out.
//!
//! The resolver is pure and total. Malformed or missing fields never fail;
//! they fall through the precedence chain until the text fallback
//! (`src: None`) is reached.

use crate::model::{text_field, Metadata, IMAGE_KEYS, NAME_KEYS, VIDEO_KEYS};

/// File extensions treated as video containers when an image-keyed field
/// actually points at a motion file.
const VIDEO_EXTENSIONS: &[&str] = &["mp4", "webm", "ogg", "mov"];

/// Known-portrait table: slugged display name to bundled portrait path.
const PORTRAITS: &[(&str, &str)] = &[
    ("plato", "/portraits/plato.jpg"),
    ("aristotle", "/portraits/aristotle.jpg"),
    ("immanuel-kant", "/portraits/kant.jpg"),
    ("friedrich-nietzsche", "/portraits/nietzsche.jpg"),
];

const AVATAR_BACKGROUND: &str = "020617";
const AVATAR_FOREGROUND: &str = "e5e7eb";
const AVATAR_SIZE: u32 = 256;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaKind {
    Image,
    Video,
}

/// What the surface should render inside a node card. Derived on demand from
/// metadata, never stored on the node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaDescriptor {
    pub kind: MediaKind,
    pub src: Option<String>,
    pub poster: Option<String>,
}

impl MediaDescriptor {
    fn image(src: Option<String>) -> Self {
        Self {
            kind: MediaKind::Image,
            src,
            poster: None,
        }
    }

    fn video(src: String, poster: Option<String>) -> Self {
        Self {
            kind: MediaKind::Video,
            src: Some(src),
            poster,
        }
    }
}

/// Resolves a node's media, with `fallback_name` standing in for the node id
/// as the last display-name candidate.
///
/// Precedence: explicit video field; explicit image field (sniffed for video
/// containers by extension); display name via the portrait table or a
/// generated avatar; text fallback.
pub fn resolve(meta: &Metadata, fallback_name: Option<&str>) -> MediaDescriptor {
    let explicit_image = text_field(meta, IMAGE_KEYS);

    if let Some(video) = text_field(meta, VIDEO_KEYS) {
        return MediaDescriptor::video(video, explicit_image);
    }

    if let Some(image) = explicit_image {
        if media_extension(&image)
            .is_some_and(|ext| VIDEO_EXTENSIONS.contains(&ext.as_str()))
        {
            return MediaDescriptor::video(image, None);
        }
        return MediaDescriptor::image(Some(image));
    }

    let name = text_field(meta, NAME_KEYS)
        .or_else(|| fallback_name.map(str::to_owned));
    let Some(name) = name else {
        return MediaDescriptor::image(None);
    };

    let slug = slug(&name);
    for (known, portrait) in PORTRAITS {
        if *known == slug {
            return MediaDescriptor::image(Some((*portrait).to_owned()));
        }
    }

    MediaDescriptor::image(Some(avatar_url(&name)))
}

/// Lowercased extension of the path component: fragment stripped first, then
/// query, then everything after the final dot.
fn media_extension(src: &str) -> Option<String> {
    let path = src.split('#').next().unwrap_or(src);
    let path = path.split('?').next().unwrap_or(path);
    let (_, ext) = path.rsplit_once('.')?;
    if ext.is_empty() {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}

/// Normalizes a display name for portrait lookup: lowercase, every run of
/// non-alphanumeric characters collapsed to a single `-`, ends trimmed.
pub fn slug(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut pending_separator = false;

    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_separator && !out.is_empty() {
                out.push('-');
            }
            pending_separator = false;
            out.extend(ch.to_lowercase());
        } else {
            pending_separator = true;
        }
    }

    out
}

fn avatar_url(name: &str) -> String {
    format!(
        "https://ui-avatars.com/api/?name={}&background={AVATAR_BACKGROUND}&color={AVATAR_FOREGROUND}&size={AVATAR_SIZE}",
        urlencoding::encode(name)
    )
}
