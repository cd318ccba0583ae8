//! Geometric invariants of gallery layouts over a sweep of inputs.
//!
//! Every combination of tile count, container shape, minimum aspect ratio,
//! and column cap is computed and checked against the properties any
//! layout must satisfy: tiles fit the container on both axes, never exceed
//! the aspect cap, and the chosen grid is at least as large as every other
//! proposed grid.

use zentile::*;

const CONTAINERS: [(u32, u32); 10] = [
    (1920, 1080),
    (1080, 1920),
    (1280, 720),
    (1600, 900),
    (900, 1600),
    (1000, 1000),
    (3840, 400),
    (400, 3840),
    (333, 777),
    (201, 199),
];

const ASPECT_RATIOS: [f64; 7] = [0.75, 1.0, 4.0 / 3.0, 1.5, 1.77, 16.0 / 9.0, 2.0];

const CAPS: [u32; 6] = [0, 1, 2, 3, 4, 6];

/// Run `check` for every swept input.
fn sweep(mut check: impl FnMut(GalleryParams)) {
    for n in 1..=30 {
        for (w, h) in CONTAINERS {
            for ar in ASPECT_RATIOS {
                for cap in CAPS {
                    check(GalleryParams::new(n, Container::new(w, h), ar).max_columns(cap));
                }
            }
        }
    }
}

fn container(params: &GalleryParams) -> Container {
    params.container.expect("sweep always sets a container")
}

#[test]
fn grid_dimensions_are_positive_and_consistent() {
    sweep(|p| {
        let tile = p.compute();
        assert!(tile.columns >= 1, "{p:?}");
        assert_eq!(tile.rows, p.tiles.div_ceil(tile.columns), "{p:?}");
        assert!(tile.rows >= 1, "{p:?}");
        assert!(!tile.is_empty(), "{p:?}");
    });
}

#[test]
fn tiles_never_overflow_container() {
    sweep(|p| {
        let c = container(&p);
        let tile = p.compute();
        assert!(
            tile.height <= c.height as f64 / tile.rows as f64,
            "vertical overflow {p:?} -> {tile:?}"
        );
        assert!(
            tile.pixel_width <= c.width as f64 / tile.columns as f64,
            "horizontal overflow {p:?} -> {tile:?}"
        );
    });
}

#[test]
fn tiles_respect_aspect_cap() {
    sweep(|p| {
        let tile = p.compute();
        let max_ar = p.max_tile_aspect_ratio();
        assert_eq!(tile.max_tile_aspect_ratio, max_ar);
        assert!(tile.pixel_width <= tile.height * max_ar, "{p:?} -> {tile:?}");
        assert_eq!(tile.max_width, max_ar * tile.height);
    });
}

#[test]
fn column_cap_is_honored() {
    sweep(|p| {
        let tile = p.compute();
        if let Some(cap) = p.max_columns {
            assert!(tile.columns <= cap.get(), "{p:?} -> {tile:?}");
            assert_eq!(tile.max_tile_aspect_ratio, CAPPED_MAX_TILE_ASPECT_RATIO);
        } else {
            assert_eq!(tile.max_tile_aspect_ratio, MAX_TILE_ASPECT_RATIO);
        }
    });
}

#[test]
fn chosen_grid_beats_every_candidate() {
    sweep(|p| {
        let c = container(&p);
        let max_ar = p.max_tile_aspect_ratio();
        let ratio = c.aspect_ratio() / p.min_tile_aspect_ratio;
        let tile = p.compute();
        let chosen_area = tile.pixel_width * tile.height;

        for columns in &determine_columns(p.tiles, ratio, max_ar * 2.0) {
            let columns = match p.max_columns {
                Some(cap) => cap.get().min(columns),
                None => columns,
            };
            let other = define_tile(p.tiles, p.min_tile_aspect_ratio, max_ar, c, columns);
            assert!(
                chosen_area > other.area
                    || (chosen_area == other.area && tile.columns >= other.columns),
                "{p:?}: chose {tile:?} over {other:?}"
            );
        }
    });
}

#[test]
fn square_counts_consider_square_grid() {
    for n in [4, 9, 16, 25] {
        for (w, h) in CONTAINERS {
            for ar in ASPECT_RATIOS {
                let ratio = Container::new(w, h).aspect_ratio() / ar;
                let side = (n as f64).sqrt() as u32;
                assert!(determine_columns(n, ratio, 4.0).contains(side));
            }
        }
    }
}

#[test]
fn row_widths_never_exceed_hundred_percent() {
    sweep(|p| {
        let tile = p.compute();
        assert!(tile.width_percent * tile.columns as f64 <= 100.0 + 1e-9);
    });
}

#[test]
fn output_is_deterministic() {
    sweep(|p| {
        assert_eq!(p.compute().to_css(), p.compute().to_css());
    });
}

#[test]
fn single_tile_always_spans_width() {
    for (w, h) in CONTAINERS {
        for ar in ASPECT_RATIOS {
            for cap in CAPS {
                let p = GalleryParams::new(1, Container::new(w, h), ar).max_columns(cap);
                let tile = p.compute();
                assert_eq!((tile.columns, tile.rows), (1, 1));
                assert_eq!(tile.to_css().width, "100.0%");
            }
        }
    }
}

#[test]
fn reference_layouts() {
    let cases: [(u32, u32, u32, f64, u32, &str, &str, &str); 6] = [
        (1, 1920, 1080, 1.77, 0, "100.0%", "1080px", "2160px"),
        (2, 1600, 900, 1.77, 0, "50.0%", "451.9774011299435px", "903.954802259887px"),
        (2, 900, 1600, 1.77, 0, "100.0%", "508.47457627118644px", "1016.9491525423729px"),
        (5, 1920, 1080, 1.77, 0, "50.0%", "360px", "720px"),
        (9, 900, 900, 1.0, 0, "33.3%", "300px", "600px"),
        (6, 1920, 1080, 1.5, 2, "50.0%", "360px", "666px"),
    ];
    for (n, w, h, ar, cap, width, height, max_width) in cases {
        let css = GalleryParams::new(n, Container::new(w, h), ar)
            .max_columns(cap)
            .compute()
            .to_css();
        assert_eq!(
            (css.width.as_str(), css.height.as_str(), css.max_width.as_str()),
            (width, height, max_width),
            "n={n} {w}x{h} ar={ar} cap={cap}"
        );
    }
}

#[test]
fn degenerate_inputs_yield_empty_tile() {
    let empty = TileSize::EMPTY.to_css();
    for p in [
        GalleryParams::new(0, Container::new(1920, 1080), 1.77),
        GalleryParams::without_container(3, 1.77),
        GalleryParams::new(3, Container::new(0, 0), 1.77),
    ] {
        assert!(p.validate().is_err());
        let tile = gallery_mode_tile_size(&p);
        assert!(tile.is_empty());
        assert_eq!(tile.to_css(), empty);
    }
    assert_eq!(empty.width, "0%");
    assert_eq!(empty.height, "0px");
    assert_eq!(empty.max_width, "0px");
}

#[test]
fn sidebar_capacity_bounds() {
    for (w, h) in CONTAINERS {
        let cap = sidebar_max_tiles(Some(Container::new(w, h))).expect("container given");
        assert!((1..=5).contains(&cap.max_columns));
        assert!((1..=MAX_ONSCREEN_TILES).contains(&cap.total));
    }
    assert_eq!(sidebar_max_tiles(None), None);
    assert_eq!(
        sidebar_max_tiles(Some(Container::new(1000, 2000))),
        Some(SidebarCapacity {
            max_columns: 5,
            total: 25
        })
    );
}
