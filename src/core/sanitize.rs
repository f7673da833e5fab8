/// Normalize a human-supplied project name into a package-safe identifier.
///
/// Trims whitespace, lowercases, maps every character outside
/// `[a-z0-9-._/]` to `-`, and collapses runs of `/` into one `/`.
/// Total: any input produces some valid output (an all-symbol input
/// becomes a string of hyphens, which is accepted).
pub fn sanitize_pkg_name(name: &str) -> String {
    let mut out = String::new();
    let mut prev_was_slash = false;

    for ch in name.trim().chars() {
        let normalized = match ch {
            'a'..='z' | '0'..='9' | '-' | '.' | '_' => ch,
            'A'..='Z' => ch.to_ascii_lowercase(),
            '/' => '/',
            _ => '-',
        };

        if normalized == '/' {
            if prev_was_slash {
                continue;
            }
            out.push('/');
            prev_was_slash = true;
        } else {
            out.push(normalized);
            prev_was_slash = false;
        }
    }

    out
}
