//! Syntax constants shared by the expression engine and the generator

/// Opening delimiter of a placeholder inside a string leaf
pub const PLACEHOLDER_OPEN: &str = "{{";

/// Closing delimiter of a placeholder inside a string leaf
pub const PLACEHOLDER_CLOSE: &str = "}}";

/// Path segment that repeats over every element of a sequence
pub const EACH_TOKEN: &str = "@each";

/// Separator between path segments
pub const SEGMENT_SEPARATOR: char = '.';

/// Opening brace of an alternation group
pub const GROUP_OPEN: char = '{';

/// Closing brace of an alternation group
pub const GROUP_CLOSE: char = '}';

/// Separator between alternatives inside a group
pub const ALTERNATIVE_SEPARATOR: char = ',';
