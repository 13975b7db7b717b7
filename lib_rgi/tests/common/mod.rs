use lib_rgi::IconSet;

pub const ICON_COUNT: u16 = 4;
pub const ICON_SIZE: u16 = 16;

/// Small hand-filled set exercising names, the numeric fallback and both
/// halves of the packed bitmap words.
pub fn sample_set() -> IconSet {
    let mut set = IconSet::new(ICON_COUNT, ICON_SIZE).unwrap();

    set.set_name(0, "ARROW_LEFT").unwrap();
    set.set_name(1, "ARROW_RIGHT").unwrap();
    // icon 2 stays unnamed on purpose
    set.set_name(3, "CROSS").unwrap();

    set.set_pixel(0, 0, 0).unwrap();
    set.set_pixel(0, 15, 15).unwrap();
    set.set_pixel(1, 7, 3).unwrap();
    for d in 0..ICON_SIZE {
        set.set_pixel(3, d, d).unwrap();
    }

    set
}
