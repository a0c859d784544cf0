use super::{ScaleEntries, ScaleSet};

const LIGHT: ScaleEntries = [
    ("sage1", "#fbfdfc"),
    ("sage2", "#f7f9f8"),
    ("sage3", "#eef1f0"),
    ("sage4", "#e6e9e8"),
    ("sage5", "#dfe2e0"),
    ("sage6", "#d7dad9"),
    ("sage7", "#cbcfcd"),
    ("sage8", "#b8bcba"),
    ("sage9", "#868e8b"),
    ("sage10", "#7c8481"),
    ("sage11", "#5f6563"),
    ("sage12", "#1a211e"),
];

const DARK: ScaleEntries = [
    ("sage1", "#101211"),
    ("sage2", "#171918"),
    ("sage3", "#202221"),
    ("sage4", "#272a29"),
    ("sage5", "#2e3130"),
    ("sage6", "#373b39"),
    ("sage7", "#444947"),
    ("sage8", "#5b625f"),
    ("sage9", "#63706b"),
    ("sage10", "#717d79"),
    ("sage11", "#adb5b2"),
    ("sage12", "#eceeed"),
];

const ALPHA: ScaleEntries = [
    ("sageA1", "#00804004"),
    ("sageA2", "#00402008"),
    ("sageA3", "#002d1e11"),
    ("sageA4", "#001f1519"),
    ("sageA5", "#00180820"),
    ("sageA6", "#00140d28"),
    ("sageA7", "#00140a34"),
    ("sageA8", "#000f0847"),
    ("sageA9", "#00110b79"),
    ("sageA10", "#00100a83"),
    ("sageA11", "#000a07a0"),
    ("sageA12", "#000805e5"),
];

const DARK_ALPHA: ScaleEntries = [
    ("sageA1", "#00000000"),
    ("sageA2", "#f0f2f108"),
    ("sageA3", "#f3f5f412"),
    ("sageA4", "#f2fefd1a"),
    ("sageA5", "#f1fbfa22"),
    ("sageA6", "#edfbf42d"),
    ("sageA7", "#edfcf73c"),
    ("sageA8", "#ebfdf657"),
    ("sageA9", "#dffdf266"),
    ("sageA10", "#e5fdf674"),
    ("sageA11", "#f4fefbb0"),
    ("sageA12", "#fdfffeed"),
];

pub const SAGE: ScaleSet = ScaleSet {
    light: LIGHT,
    dark: DARK,
    alpha: ALPHA,
    dark_alpha: DARK_ALPHA,
};
