use std::io::Cursor;

use rayon::prelude::*;

use super::*;

fn ink_pixels(tile: &Canvas, bg: Rgba8Premul) -> usize {
    tile.pixels().filter(|(_, _, px)| *px != bg).count()
}

#[test]
fn cells_follow_row_breaks() {
    let cells = sheet_cells();
    assert_eq!(cells.len(), CHARSET.chars().count());
    assert_eq!(cells[&'a'], Bounds::new(0, 0, 24, 50));
    assert_eq!(cells[&'z'], Bounds::new(600, 0, 624, 50));
    assert_eq!(cells[&'A'], Bounds::new(0, 50, 24, 100));
    assert_eq!(cells[&'0'], Bounds::new(0, 100, 24, 150));
    assert_eq!(cells[&'\''], Bounds::new(0, 150, 24, 200));
    assert_eq!(cells[&'ξ'], Bounds::new(0, 500, 24, 550));
    assert_eq!(cells[&' '], Bounds::new(120, 500, 144, 550));
}

#[test]
fn embedded_sheets_build_for_every_variant() {
    for variant in FontVariant::ALL {
        let atlas = GlyphAtlas::build(variant).unwrap();
        assert_eq!(atlas.variant(), variant);
        assert_eq!(atlas.len(), CHARSET.chars().count());

        let bg = variant.background();
        let a = atlas.glyph('a').unwrap();
        assert_eq!(a.bounds(), Bounds::from_size(GLYPH_WIDTH, GLYPH_HEIGHT));
        assert!(ink_pixels(a, bg) > 20, "{variant:?} 'a' has no ink");
        assert!(ink_pixels(atlas.glyph('Ω').unwrap(), bg) > 20);
        assert_eq!(ink_pixels(atlas.glyph(' ').unwrap(), bg), 0);
        assert!(atlas.glyph('☃').is_none());
        assert_eq!(atlas.cell('b'), Some(Bounds::new(24, 0, 48, 50)));
    }
}

#[test]
fn glyph_tiles_are_opaque() {
    let atlas = GlyphAtlas::build(FontVariant::Black).unwrap();
    let tile = atlas.glyph('W').unwrap();
    assert!(tile.pixels().all(|(_, _, px)| px.a == 255));
    assert!(
        tile.pixels()
            .any(|(_, _, px)| px == Rgba8Premul::opaque(0, 0, 0))
    );
}

#[test]
fn undersized_sheet_is_rejected() {
    let img = image::RgbaImage::new(24, 50);
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    let err = GlyphAtlas::from_sheet(FontVariant::Gray, &buf).unwrap_err();
    assert!(matches!(err, ScrawlError::Asset(_)));
}

#[test]
fn corrupt_sheet_is_rejected() {
    let err = GlyphAtlas::from_sheet(FontVariant::Gray, b"\x89PNG broken").unwrap_err();
    assert!(matches!(err, ScrawlError::Asset(_)));
}

#[test]
fn cache_rebuilds_only_on_variant_change() {
    let cache = AtlasCache::new();
    let first = cache.get_or_build(FontVariant::Gray).unwrap();
    let again = cache.get_or_build(FontVariant::Gray).unwrap();
    assert!(Arc::ptr_eq(&first, &again));
    assert_eq!(cache.builds(), 1);

    cache.get_or_build(FontVariant::Inverted).unwrap();
    cache.get_or_build(FontVariant::Inverted).unwrap();
    assert_eq!(cache.builds(), 2);

    let back = cache.get_or_build(FontVariant::Gray).unwrap();
    assert_eq!(cache.builds(), 3);
    assert!(!Arc::ptr_eq(&first, &back));
}

#[test]
fn concurrent_first_use_builds_once() {
    let cache = AtlasCache::new();
    let atlases = (0..16)
        .into_par_iter()
        .map(|_| cache.get_or_build(FontVariant::Black).unwrap())
        .collect::<Vec<_>>();
    assert_eq!(cache.builds(), 1);
    assert!(atlases.iter().all(|a| Arc::ptr_eq(a, &atlases[0])));
}

#[test]
fn variant_parses_case_insensitively() {
    assert_eq!("Gray".parse::<FontVariant>().unwrap(), FontVariant::Gray);
    assert_eq!("grey".parse::<FontVariant>().unwrap(), FontVariant::Gray);
    assert_eq!("INVERTED".parse::<FontVariant>().unwrap(), FontVariant::Inverted);
    assert!("sepia".parse::<FontVariant>().is_err());
}
