/// Roman numeral for an oxidation number, e.g. 2 -> "II".
///
/// General subtractive form; the naming rules only ever need 1-10.
pub fn to_roman(mut n: u32) -> String {
    const PAIRS: &[(u32, &str)] = &[
        (1000, "M"),
        (900, "CM"),
        (500, "D"),
        (400, "CD"),
        (100, "C"),
        (90, "XC"),
        (50, "L"),
        (40, "XL"),
        (10, "X"),
        (9, "IX"),
        (5, "V"),
        (4, "IV"),
        (1, "I"),
    ];

    let mut out = String::new();
    for &(value, digits) in PAIRS {
        while n >= value {
            out.push_str(digits);
            n -= value;
        }
    }
    out
}
