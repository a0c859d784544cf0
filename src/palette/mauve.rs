use super::{ScaleEntries, ScaleSet};

const LIGHT: ScaleEntries = [
    ("mauve1", "#fdfcfd"),
    ("mauve2", "#faf9fb"),
    ("mauve3", "#f2eff3"),
    ("mauve4", "#eae7ec"),
    ("mauve5", "#e3dfe6"),
    ("mauve6", "#dbd8e0"),
    ("mauve7", "#d0cdd7"),
    ("mauve8", "#bcbac7"),
    ("mauve9", "#8e8c99"),
    ("mauve10", "#84828e"),
    ("mauve11", "#65636d"),
    ("mauve12", "#211f26"),
];

const DARK: ScaleEntries = [
    ("mauve1", "#121113"),
    ("mauve2", "#1a191b"),
    ("mauve3", "#232225"),
    ("mauve4", "#2b292d"),
    ("mauve5", "#323035"),
    ("mauve6", "#3c393f"),
    ("mauve7", "#49474e"),
    ("mauve8", "#625f69"),
    ("mauve9", "#6f6d78"),
    ("mauve10", "#7c7a85"),
    ("mauve11", "#b5b2bc"),
    ("mauve12", "#eeeef0"),
];

const ALPHA: ScaleEntries = [
    ("mauveA1", "#55005503"),
    ("mauveA2", "#2b005506"),
    ("mauveA3", "#30004010"),
    ("mauveA4", "#20003618"),
    ("mauveA5", "#20003820"),
    ("mauveA6", "#14003527"),
    ("mauveA7", "#10003332"),
    ("mauveA8", "#08003145"),
    ("mauveA9", "#05001d73"),
    ("mauveA10", "#0500197d"),
    ("mauveA11", "#0400119c"),
    ("mauveA12", "#020008e0"),
];

const DARK_ALPHA: ScaleEntries = [
    ("mauveA1", "#00000000"),
    ("mauveA2", "#f5f4f609"),
    ("mauveA3", "#ebeaf814"),
    ("mauveA4", "#eee5f81d"),
    ("mauveA5", "#efe6fe25"),
    ("mauveA6", "#f1e6fd30"),
    ("mauveA7", "#eee9ff40"),
    ("mauveA8", "#eee7ff5d"),
    ("mauveA9", "#eae6fd6e"),
    ("mauveA10", "#ece9fd7c"),
    ("mauveA11", "#f5f1ffb7"),
    ("mauveA12", "#fdfdffef"),
];

pub const MAUVE: ScaleSet = ScaleSet {
    light: LIGHT,
    dark: DARK,
    alpha: ALPHA,
    dark_alpha: DARK_ALPHA,
};
