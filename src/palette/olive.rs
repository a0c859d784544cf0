use super::{ScaleEntries, ScaleSet};

const LIGHT: ScaleEntries = [
    ("olive1", "#fcfdfc"),
    ("olive2", "#f8faf8"),
    ("olive3", "#eff1ef"),
    ("olive4", "#e7e9e7"),
    ("olive5", "#dfe2df"),
    ("olive6", "#d7dad7"),
    ("olive7", "#cccfcc"),
    ("olive8", "#b9bcb8"),
    ("olive9", "#898e87"),
    ("olive10", "#7f847d"),
    ("olive11", "#60655f"),
    ("olive12", "#1d211c"),
];

const DARK: ScaleEntries = [
    ("olive1", "#111210"),
    ("olive2", "#181917"),
    ("olive3", "#212220"),
    ("olive4", "#282a27"),
    ("olive5", "#2f312e"),
    ("olive6", "#383a36"),
    ("olive7", "#454843"),
    ("olive8", "#5c625b"),
    ("olive9", "#687066"),
    ("olive10", "#767d74"),
    ("olive11", "#afb5ad"),
    ("olive12", "#eceeec"),
];

const ALPHA: ScaleEntries = [
    ("oliveA1", "#00550003"),
    ("oliveA2", "#00490007"),
    ("oliveA3", "#00200010"),
    ("oliveA4", "#00160018"),
    ("oliveA5", "#00180020"),
    ("oliveA6", "#00140028"),
    ("oliveA7", "#000f0033"),
    ("oliveA8", "#040f0047"),
    ("oliveA9", "#050f0078"),
    ("oliveA10", "#040e0082"),
    ("oliveA11", "#020a00a0"),
    ("oliveA12", "#010600e3"),
];

const DARK_ALPHA: ScaleEntries = [
    ("oliveA1", "#00000000"),
    ("oliveA2", "#f1f2f008"),
    ("oliveA3", "#f4f5f312"),
    ("oliveA4", "#f3fef21a"),
    ("oliveA5", "#f2fbf122"),
    ("oliveA6", "#f4faed2c"),
    ("oliveA7", "#f2fced3b"),
    ("oliveA8", "#edfdeb57"),
    ("oliveA9", "#ebfde766"),
    ("oliveA10", "#f0fdec74"),
    ("oliveA11", "#f6fef4b0"),
    ("oliveA12", "#fdfffded"),
];

pub const OLIVE: ScaleSet = ScaleSet {
    light: LIGHT,
    dark: DARK,
    alpha: ALPHA,
    dark_alpha: DARK_ALPHA,
};
