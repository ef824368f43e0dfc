use regex::Regex;

/// Reduce run-list entries (`role[base]`, `recipe[nginx::default]`) to their inner names.
pub(crate) fn parse_run_list(entries: &[String]) -> Vec<String> {
    let qualified = Regex::new(r"^.*\[(.*)\]$").unwrap();

    entries
        .iter()
        .map(|entry| {
            let entry = entry.trim();
            let inner = match qualified.captures(entry) {
                Some(captures) => captures.get(1).map(|m| m.as_str()).unwrap_or(""),
                None => entry,
            };

            inner.chars().filter(|c| !matches!(c, '"' | '[' | ']')).collect::<String>()
        })
        .filter(|role| !role.is_empty())
        .collect()
}

pub(crate) fn display_roles(roles: &[String]) -> String {
    roles.join(", ")
}
