//! The decoded course area and the decoder that produces it.

use serde::Serialize;
use tracing::{debug, info};

use crate::archive::StreamProvider;
use crate::codec::{to20, ByteCursor, CoordScale};
use crate::course::bgdat::{read_bgdat, BgdatObject, LAYER_COUNT, STREAM_LAYERS};
use crate::course::blocks::{
    read_entrances, read_locations, read_zones, AreaSettings, Background, Entrance, Location,
    Zone, ZoneBounds, ZoneStride,
};
use crate::course::directory::{block, BlockDirectory};
use crate::course::paths::{read_paths, read_progress_paths, Path, ProgressPath};
use crate::course::sprites::{read_sprites, Sprite, SpriteSizeTable, UniformSpriteSizes};
use crate::course::tileset::{read_tileset_slots, NoTilesets, TilesetResolver, TilesetSlot, TILESET_SLOTS};
use crate::error::{Error, Result};

/// Header stream of area `area` inside a course archive.
pub fn header_path(area: u32) -> String {
    format!("/course/course{area}.bin")
}

/// Background object stream for `layer` (0-based) of area `area`.
pub fn bgdat_path(area: u32, layer: usize) -> String {
    format!("/course/course{area}_bgdatL{}.bin", layer + 1)
}

/// One decoded course area.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CourseFile {
    pub area: u32,
    pub directory: BlockDirectory,
    pub tilesets: [TilesetSlot; TILESET_SLOTS],
    pub area_settings: Option<AreaSettings>,
    pub zone_bounds: Option<ZoneBounds>,
    pub background: Option<Background>,
    pub entrances: Vec<Entrance>,
    pub sprites: Vec<Sprite>,
    pub zones: Vec<Zone>,
    pub locations: Vec<Location>,
    pub paths: Vec<Path>,
    pub progress_paths: Vec<ProgressPath>,
    /// Background objects per layer. The last layer is never filled from
    /// course streams.
    pub objects: [Vec<BgdatObject>; LAYER_COUNT],
}

impl CourseFile {
    pub fn time_limit(&self) -> Option<u16> {
        self.area_settings.map(|a| a.time_limit)
    }

    pub fn layer(&self, index: usize) -> &[BgdatObject] {
        &self.objects[index]
    }

    pub fn object_count(&self) -> usize {
        self.objects.iter().map(Vec::len).sum()
    }
}

/// Decode-time settings.
#[derive(Debug, Clone, Copy)]
pub struct DecoderConfig {
    /// Raw grid to internal unit transform for every scaled field except
    /// background objects.
    pub scale: CoordScale,
    pub zone_stride: ZoneStride,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self { scale: to20, zone_stride: ZoneStride::default() }
    }
}

/// Builder for decoding course areas.
///
/// Holds no state between decodes; one decoder can be shared by any number
/// of callers, each decode works on its own cursor.
#[derive(Clone, Copy)]
pub struct CourseDecoder<'r> {
    config: DecoderConfig,
    tilesets: &'r dyn TilesetResolver,
    sprite_sizes: &'r dyn SpriteSizeTable,
}

impl Default for CourseDecoder<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'r> CourseDecoder<'r> {
    pub fn new() -> Self {
        Self {
            config: DecoderConfig::default(),
            tilesets: &NoTilesets,
            sprite_sizes: &UniformSpriteSizes,
        }
    }

    pub fn config(mut self, config: DecoderConfig) -> Self {
        self.config = config;
        self
    }

    pub fn scale(mut self, scale: CoordScale) -> Self {
        self.config.scale = scale;
        self
    }

    pub fn zone_stride(mut self, stride: ZoneStride) -> Self {
        self.config.zone_stride = stride;
        self
    }

    pub fn tilesets(mut self, resolver: &'r dyn TilesetResolver) -> Self {
        self.tilesets = resolver;
        self
    }

    pub fn sprite_sizes(mut self, sizes: &'r dyn SpriteSizeTable) -> Self {
        self.sprite_sizes = sizes;
        self
    }

    /// Decode an area from its header stream and up to two layer streams.
    pub fn decode(&self, area: u32, header: &[u8], layers: [Option<&[u8]>; STREAM_LAYERS]) -> Result<CourseFile> {
        let scale = self.config.scale;
        let mut cursor = ByteCursor::new(header);
        let directory = BlockDirectory::read(&mut cursor)?;
        let entry = |index| directory.entry(index);

        let tilesets = read_tileset_slots(&mut cursor, entry(block::TILESETS), self.tilesets)?;
        let area_settings = AreaSettings::read(&mut cursor, entry(block::AREA_SETTINGS))?;
        let zone_bounds = ZoneBounds::read(&mut cursor, entry(block::ZONE_BOUNDS))?;
        let background = Background::read(&mut cursor, entry(block::BACKGROUND))?;
        let entrances = read_entrances(&mut cursor, entry(block::ENTRANCES), scale)?;
        let sprites = read_sprites(&mut cursor, entry(block::SPRITES), scale, self.sprite_sizes)?;
        let zones = read_zones(&mut cursor, entry(block::ZONES), scale, self.config.zone_stride)?;
        let locations = read_locations(&mut cursor, entry(block::LOCATIONS), scale)?;
        let paths = read_paths(&mut cursor, entry(block::PATHS), entry(block::PATH_NODES), scale)?;
        let progress_paths = read_progress_paths(
            &mut cursor,
            entry(block::PROGRESS_PATHS),
            entry(block::PROGRESS_PATH_NODES),
            scale,
        )?;

        let mut objects: [Vec<BgdatObject>; LAYER_COUNT] = Default::default();
        for (layer, data) in layers.iter().enumerate() {
            if let Some(data) = data {
                objects[layer] = read_bgdat(data)?;
                debug!(layer, count = objects[layer].len(), "background objects");
            }
        }

        Ok(CourseFile {
            area,
            directory,
            tilesets,
            area_settings,
            zone_bounds,
            background,
            entrances,
            sprites,
            zones,
            locations,
            paths,
            progress_paths,
            objects,
        })
    }

    /// Open and decode area `area` from a course archive.
    ///
    /// A missing header stream is an error; missing layer streams are not.
    pub fn load(&self, fs: &dyn StreamProvider, area: u32) -> Result<CourseFile> {
        let path = header_path(area);
        if !fs.exists(&path) {
            return Err(Error::MissingHeader { path });
        }
        let header = fs.open(&path)?;

        let mut layers: [Option<Vec<u8>>; STREAM_LAYERS] = Default::default();
        for (layer, slot) in layers.iter_mut().enumerate() {
            let path = bgdat_path(area, layer);
            if fs.exists(&path) {
                *slot = Some(fs.open(&path)?);
            }
        }

        let course = self.decode(area, &header, [layers[0].as_deref(), layers[1].as_deref()])?;
        info!(
            area,
            entrances = course.entrances.len(),
            sprites = course.sprites.len(),
            zones = course.zones.len(),
            objects = course.object_count(),
            "course loaded"
        );
        Ok(course)
    }
}
