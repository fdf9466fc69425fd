/// Check if color output should be disabled
/// Respects NO_COLOR environment variable
pub fn should_disable_color() -> bool {
    std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty())
}

/// Turn off `colored` styling when NO_COLOR is set or stdout is not a terminal
pub fn init_color(interactive: bool) {
    if should_disable_color() || !interactive {
        colored::control::set_override(false);
    }
}
