//! Glyph grid watchface
//!
//! Five rows of five bitmap-font cells: battery, time, weekday, date and a
//! fixed label. Each row keeps its own text, refreshed by the event that
//! owns it; painting only reads that text.

use embedded_graphics::{
    draw_target::DrawTarget,
    geometry::{Dimensions, OriginDimensions, Size},
    image::ImageRaw,
    pixelcolor::{BinaryColor, Gray2, PixelColor},
};

use super::{
    font::{SHEET_COLUMNS, SHEET_ROWS},
    renderer::{draw_row, Sheets},
    Error, FaceState, RowText, WatchFace, FACE_ROWS,
};
use crate::{
    peripherals::{
        battery::{format_battery, BatteryInfo},
        display::ColorMode,
    },
    system::{
        config::{FaceConfig, Layout},
        host::{BitmapResource, Host, ResourceId, ResourceProvider},
        time::{format_date, format_time, format_weekday},
    },
};

/// What a grid row shows
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RowContent {
    Battery,
    Time,
    Weekday,
    Date,
    Label,
}

/// Row binding, top to bottom
pub const ROW_ORDER: [RowContent; FACE_ROWS] = [
    RowContent::Battery,
    RowContent::Time,
    RowContent::Weekday,
    RowContent::Date,
    RowContent::Label,
];

/// Text of the rows that change at runtime
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FaceText {
    pub time: RowText,
    pub date: RowText,
    pub weekday: RowText,
    pub battery: RowText,
}

enum Lifecycle<'r> {
    Uninitialized,
    Loaded(Sheets<'r>),
    Unloaded,
}

/// Watchface drawing text as a grid of bitmap glyphs
pub struct GlyphWatchface<'r> {
    config: FaceConfig,
    lifecycle: Lifecycle<'r>,
    text: FaceText,
}

impl<'r> GlyphWatchface<'r> {
    /// Create new watchface, not yet loaded
    pub fn new(config: FaceConfig) -> Self {
        Self {
            config,
            lifecycle: Lifecycle::Uninitialized,
            text: FaceText::default(),
        }
    }

    pub fn config(&self) -> &FaceConfig {
        &self.config
    }

    pub fn text(&self) -> &FaceText {
        &self.text
    }

    pub fn state(&self) -> FaceState {
        match self.lifecycle {
            Lifecycle::Uninitialized => FaceState::Uninitialized,
            Lifecycle::Loaded(_) => FaceState::Loaded,
            Lifecycle::Unloaded => FaceState::Unloaded,
        }
    }

    /// Text currently bound to `content`
    pub fn row_text(&self, content: RowContent) -> &RowText {
        match content {
            RowContent::Battery => &self.text.battery,
            RowContent::Time => &self.text.time,
            RowContent::Weekday => &self.text.weekday,
            RowContent::Date => &self.text.date,
            RowContent::Label => &self.config.label,
        }
    }

    /// Only a loaded window has a layer to invalidate
    fn request_redraw<H: Host>(&self, host: &mut H) {
        if let Lifecycle::Loaded(_) = self.lifecycle {
            host.mark_dirty();
        }
    }
}

impl Default for GlyphWatchface<'_> {
    fn default() -> Self {
        Self::new(FaceConfig::default())
    }
}

/// Fetch a bitmap and check it covers at least `min` pixels each way
fn load_bitmap<'r, C, R>(
    resources: &R,
    id: ResourceId,
    min: Size,
) -> Result<ImageRaw<'r, C>, Error>
where
    C: PixelColor + From<<C as PixelColor>::Raw>,
    R: ResourceProvider<'r>,
{
    let BitmapResource { width, data } = resources
        .bitmap(id)
        .ok_or(Error::ResourceMissing(id))?;
    if width == 0 {
        return Err(Error::BitmapSize(id));
    }

    let image: ImageRaw<'r, C> = ImageRaw::new(data, width);
    let size = image.size();
    if size.width < min.width || size.height < min.height {
        return Err(Error::BitmapSize(id));
    }
    Ok(image)
}

fn load_sheets<'r, R: ResourceProvider<'r>>(layout: &Layout, resources: &R) -> Result<Sheets<'r>, Error> {
    let digit = load_bitmap::<Gray2, _>(resources, ResourceId::DigitBackground, layout.cell)?;
    let font = load_bitmap::<BinaryColor, _>(
        resources,
        ResourceId::FontSheet,
        Size::new(
            layout.cell.width * u32::from(SHEET_COLUMNS),
            layout.cell.height * u32::from(SHEET_ROWS),
        ),
    )?;
    Ok(Sheets { digit, font })
}

impl<'r> WatchFace<'r> for GlyphWatchface<'r> {
    fn on_load<R, H>(&mut self, resources: &R, host: &mut H) -> Result<(), Error>
    where
        R: ResourceProvider<'r>,
        H: Host,
    {
        let state = self.state();
        if state != FaceState::Uninitialized {
            warn!("load rejected, watchface is {}", state);
            return Err(Error::Lifecycle(state));
        }

        let sheets = load_sheets(&self.config.layout, resources)?;
        self.lifecycle = Lifecycle::Loaded(sheets);
        info!("Watchface loaded");

        self.on_minute_tick(host);
        let battery = host.battery_state();
        self.on_battery_change(battery, host);
        Ok(())
    }

    fn on_unload(&mut self) -> Result<(), Error> {
        match self.lifecycle {
            Lifecycle::Loaded(_) => {
                // Dropping the sheets hands the bitmaps back
                self.lifecycle = Lifecycle::Unloaded;
                info!("Watchface unloaded");
                Ok(())
            }
            _ => {
                let state = self.state();
                warn!("unload rejected, watchface is {}", state);
                Err(Error::Lifecycle(state))
            }
        }
    }

    fn on_minute_tick<H: Host>(&mut self, host: &mut H) {
        let now = host.local_time();
        self.text.time = format_time(&now, host.clock_is_24h_style());
        self.text.date = format_date(&now, self.config.date_order);
        self.text.weekday = format_weekday(&now, self.config.language);
        debug!(
            "Time updated: {} {} {}",
            self.text.time.as_str(),
            self.text.weekday.as_str(),
            self.text.date.as_str()
        );

        self.request_redraw(host);
    }

    fn on_battery_change<H: Host>(&mut self, state: BatteryInfo, host: &mut H) {
        self.text.battery = format_battery(state, self.config.show_charging);
        debug!(
            "Battery status: {}% ({})",
            state.percent,
            if state.charging { "charging" } else { "discharging" }
        );

        self.request_redraw(host);
    }

    fn on_redraw<D>(&self, surface: &mut D) -> Result<(), Error>
    where
        D: DrawTarget<Color = ColorMode>,
    {
        let Lifecycle::Loaded(sheets) = &self.lifecycle else {
            return Err(Error::NotLoaded);
        };
        let palette = &self.config.palette;

        let area = surface.bounding_box();
        surface
            .fill_solid(&area, palette.mask)
            .map_err(|_| Error::Draw)?;

        for (row, content) in ROW_ORDER.iter().enumerate() {
            let row = row as u8;
            let row_palette = palette.row(row).ok_or(Error::RowOutOfRange(row))?;
            draw_row(
                surface,
                sheets,
                &self.config.layout,
                row_palette,
                palette.mask,
                row,
                self.row_text(*content),
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    struct TestHost {
        now: NaiveDateTime,
        is_24h: bool,
        battery: BatteryInfo,
        dirty: usize,
    }

    impl Host for TestHost {
        fn local_time(&self) -> NaiveDateTime {
            self.now
        }
        fn clock_is_24h_style(&self) -> bool {
            self.is_24h
        }
        fn battery_state(&self) -> BatteryInfo {
            self.battery
        }
        fn mark_dirty(&mut self) {
            self.dirty += 1;
        }
    }

    fn host() -> TestHost {
        TestHost {
            now: NaiveDate::from_ymd_opt(2026, 10, 17)
                .unwrap()
                .and_hms_opt(13, 5, 0)
                .unwrap(),
            is_24h: true,
            battery: BatteryInfo::new(7, false, false),
            dirty: 0,
        }
    }

    struct NoResources;

    impl<'r> ResourceProvider<'r> for NoResources {
        fn bitmap(&self, _id: ResourceId) -> Option<BitmapResource<'r>> {
            None
        }
    }

    #[test]
    fn row_binding_runs_top_to_bottom() {
        let mut face = GlyphWatchface::default();
        let mut host = host();
        face.on_minute_tick(&mut host);
        face.on_battery_change(host.battery, &mut host);

        let rows: Vec<&str> = ROW_ORDER
            .iter()
            .map(|content| face.row_text(*content).as_str())
            .collect();
        assert_eq!(rows, ["   7%", "13:05", "  SAT", "17/10", "#KNOF"]);
    }

    #[test]
    fn events_before_load_do_not_mark_dirty() {
        let mut face = GlyphWatchface::default();
        let mut host = host();
        face.on_minute_tick(&mut host);
        face.on_battery_change(BatteryInfo::new(50, false, false), &mut host);

        assert_eq!(host.dirty, 0);
        assert_eq!(face.text().battery.as_str(), "  50%");
    }

    #[test]
    fn missing_resources_keep_the_face_unloaded() {
        let mut face = GlyphWatchface::default();
        let mut host = host();

        assert_eq!(
            face.on_load(&NoResources, &mut host),
            Err(Error::ResourceMissing(ResourceId::DigitBackground))
        );
        assert_eq!(face.state(), FaceState::Uninitialized);
    }

    #[test]
    fn redraw_needs_a_loaded_face() {
        let face = GlyphWatchface::default();
        let mut canvas: crate::peripherals::display::Framebuffer<8, 8> = Default::default();
        assert_eq!(face.on_redraw(&mut canvas), Err(Error::NotLoaded));
    }
}
