use super::{ScaleEntries, ScaleSet};

const LIGHT: ScaleEntries = [
    ("slate1", "#fcfcfd"),
    ("slate2", "#f9f9fb"),
    ("slate3", "#f0f0f3"),
    ("slate4", "#e8e8ec"),
    ("slate5", "#e0e1e6"),
    ("slate6", "#d9d9e0"),
    ("slate7", "#cdced6"),
    ("slate8", "#b9bbc6"),
    ("slate9", "#8b8d98"),
    ("slate10", "#80838d"),
    ("slate11", "#60646c"),
    ("slate12", "#1c2024"),
];

const DARK: ScaleEntries = [
    ("slate1", "#111113"),
    ("slate2", "#18191b"),
    ("slate3", "#212225"),
    ("slate4", "#272a2d"),
    ("slate5", "#2e3135"),
    ("slate6", "#363a3f"),
    ("slate7", "#43484e"),
    ("slate8", "#5a6169"),
    ("slate9", "#696e77"),
    ("slate10", "#777b84"),
    ("slate11", "#b0b4ba"),
    ("slate12", "#edeef0"),
];

const ALPHA: ScaleEntries = [
    ("slateA1", "#00005503"),
    ("slateA2", "#00005506"),
    ("slateA3", "#0000330f"),
    ("slateA4", "#00002d17"),
    ("slateA5", "#0009321f"),
    ("slateA6", "#00002f26"),
    ("slateA7", "#00062e32"),
    ("slateA8", "#00083046"),
    ("slateA9", "#00051d74"),
    ("slateA10", "#00071b7f"),
    ("slateA11", "#0007149f"),
    ("slateA12", "#000509e3"),
];

const DARK_ALPHA: ScaleEntries = [
    ("slateA1", "#00000000"),
    ("slateA2", "#d8f4f609"),
    ("slateA3", "#ddeaf814"),
    ("slateA4", "#d3edf81d"),
    ("slateA5", "#d9edfe25"),
    ("slateA6", "#d6ebfd30"),
    ("slateA7", "#d9edff40"),
    ("slateA8", "#d9edff5d"),
    ("slateA9", "#dfebfd6d"),
    ("slateA10", "#e5edfd7b"),
    ("slateA11", "#f1f7feb5"),
    ("slateA12", "#fcfdffef"),
];

pub const SLATE: ScaleSet = ScaleSet {
    light: LIGHT,
    dark: DARK,
    alpha: ALPHA,
    dark_alpha: DARK_ALPHA,
};
