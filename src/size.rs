// src/size.rs
// =============================================================================
// Turns the `size` field from the GitHub API into something readable.
//
// GitHub reports repository size in kilobytes. We show:
//   - plain KB below 1024
//   - MB with two decimals below 1024 * 1024
//   - GB with two decimals otherwise
//
// The boundaries are strict `<`, so exactly 1024 KB is "1.00 MB".
// =============================================================================

const KB_PER_MB: u64 = 1024;
const KB_PER_GB: u64 = 1024 * 1024;

// Formats a size given in kilobytes
//
// Example:
//   format_size(1536) -> "1.50 MB"
pub fn format_size(size_kb: u64) -> String {
    if size_kb < KB_PER_MB {
        format!("{} KB", size_kb)
    } else if size_kb < KB_PER_GB {
        format!("{} MB", two_decimals(size_kb, KB_PER_MB))
    } else {
        format!("{} GB", two_decimals(size_kb, KB_PER_GB))
    }
}

// Divides and keeps two decimals, rounding halves up (1.125 -> "1.13")
//
// Done in integers: float formatting rounds exact halves to even.
fn two_decimals(size_kb: u64, unit: u64) -> String {
    let unit = unit as u128;
    let hundredths = (size_kb as u128 * 100 + unit / 2) / unit;
    format!("{}.{:02}", hundredths / 100, hundredths % 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kilobytes() {
        assert_eq!(format_size(0), "0 KB");
        assert_eq!(format_size(1023), "1023 KB");
    }

    #[test]
    fn test_megabytes() {
        assert_eq!(format_size(1024), "1.00 MB");
        assert_eq!(format_size(1536), "1.50 MB");
        assert_eq!(format_size(2048), "2.00 MB");
    }

    #[test]
    fn test_gigabytes() {
        assert_eq!(format_size(1024 * 1024), "1.00 GB");
        assert_eq!(format_size(3 * 1024 * 1024 + 512 * 1024), "3.50 GB");
    }

    #[test]
    fn test_halfway_values_round_up() {
        // 1152 / 1024 is exactly 1.125
        assert_eq!(format_size(1152), "1.13 MB");
        assert_eq!(format_size(1664), "1.63 MB");
        assert_eq!(format_size(1179648), "1.13 GB");
    }

    #[test]
    fn test_below_halfway_rounds_down() {
        // 1151 / 1024 = 1.12402...
        assert_eq!(format_size(1151), "1.12 MB");
    }

    #[test]
    fn test_largest_size_does_not_overflow() {
        assert_eq!(format_size(u64::MAX), "17592186044416.00 GB");
    }

    #[test]
    fn test_just_below_gigabyte_rounds_up_in_megabytes() {
        // 1048575 KB is still MB territory; two decimals round it to 1024.00
        assert_eq!(format_size(1024 * 1024 - 1), "1024.00 MB");
    }
}
