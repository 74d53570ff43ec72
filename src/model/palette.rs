const PALETTE: [&str; 18] = [
    "rgb(219, 2, 2)",
    "rgb(20, 5, 237)",
    "rgb(35, 219, 2)",
    "rgb(237, 229, 5)",
    "rgb(5, 222, 237)",
    "rgb(237, 5, 214)",
    "rgb(237, 5, 140)",
    "rgb(242, 82, 82)",
    "rgb(10, 3, 3)",
    "rgb(242, 165, 82)",
    "rgb(242, 210, 82)",
    "rgb(191, 242, 82)",
    "rgb(82, 242, 181)",
    "rgb(82, 162, 242)",
    "rgb(152, 102, 232)",
    "rgb(102, 113, 232)",
    "rgb(232, 102, 215)",
    "rgb(232, 102, 141)",
];

pub fn palette() -> &'static [&'static str] {
    &PALETTE
}

/// Series colour for the dataset at `index`, cycling through the palette.
pub fn color_for(index: usize) -> &'static str {
    let palette = palette();
    palette[index % palette.len()]
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/palette.rs"]
mod tests;
