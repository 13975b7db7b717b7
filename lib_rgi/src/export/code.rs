use crate::iconset::format::IconSet;

/// Formats an icon set as a self-contained C header: size defines, an enum
/// of icon-name ids and the packed bitmap words as one static array.
///
/// One-way export for embedding in a host program; never parsed back.
pub fn export_as_code(set: &IconSet) -> String {
    let count = set.icon_count();
    let size = set.icon_size();
    let words_per_icon = set.words_per_icon();

    let mut out = String::new();

    out.push_str("//----------------------------------------------------------------------------------\n");
    out.push_str("// Icon set exported as a packed bit array\n");
    out.push_str("//\n");
    out.push_str("// Every bit represents one pixel, so each array element\n");
    out.push_str("// holds 32 pixels of an icon bitmap\n");
    out.push_str("//----------------------------------------------------------------------------------\n\n");

    out.push_str(&format!(
        "#define ICON_SIZE             {}   // Size of icons (squared)\n",
        size
    ));
    out.push_str(&format!(
        "#define ICON_COUNT            {}   // Number of icons in the set\n",
        count
    ));
    out.push_str("#define ICON_DATA_ELEMENTS    (ICON_SIZE*ICON_SIZE/32)\n\n");

    out.push_str("typedef enum {\n");
    for id in 0..count {
        out.push_str(&format!(
            "    ICON_{:<24} = {},\n",
            fallback_name(set, id),
            id
        ));
    }
    out.push_str("} IconName;\n\n");

    out.push_str("static unsigned int iconSet[ICON_COUNT*ICON_DATA_ELEMENTS] = {\n");
    for id in 0..count {
        out.push_str("    ");
        let start = id as usize * words_per_icon;
        for &word in &set.data[start..start + words_per_icon] {
            out.push_str(&format!("{:#010x}, ", word));
        }
        out.push_str(&format!("     // ICON_{}\n", fallback_name(set, id)));
    }
    out.push_str("};\n");

    out
}

fn fallback_name(set: &IconSet, id: u16) -> String {
    let name = &set.names[id as usize];
    if name.is_empty() {
        format!("{id:03}")
    } else {
        name.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named_set() -> IconSet {
        let mut set = IconSet::new(2, 16).unwrap();
        set.set_name(0, "ARROW_LEFT").unwrap();
        set.set_pixel(0, 0, 0).unwrap();
        set
    }

    #[test]
    fn test_code_lists_defines_and_enum() {
        let code = export_as_code(&named_set());

        assert!(code.contains("#define ICON_SIZE             16"));
        assert!(code.contains("#define ICON_COUNT            2"));
        assert!(code.contains("ICON_ARROW_LEFT"));
        assert!(code.contains("= 0,"));
        // Unnamed icons fall back to the zero-padded index
        assert!(code.contains("ICON_001"));
    }

    #[test]
    fn test_code_lists_packed_words() {
        let code = export_as_code(&named_set());

        // Icon 0 has pixel (0, 0) set, so its first word is 1
        assert!(code.contains("0x00000001, "));
        assert!(code.contains("// ICON_ARROW_LEFT"));

        // One array line per icon
        assert_eq!(code.matches("    0x").count(), 2);
    }
}
