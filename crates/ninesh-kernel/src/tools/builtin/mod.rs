//! Built-in tools for ninesh.
//!
//! Registration order is the order `help` lists them in.

mod cat;
mod cd;
mod date;
mod echo;
mod fetch;
mod help;
mod identity;
mod ls;
mod mkdir;
mod ping;
mod pwd;
mod rm;
mod session;
mod setdistro;
mod sysinfo;
mod touch;
mod tree;
mod uname;

use super::ToolRegistry;

/// Register all built-in tools with the registry.
pub fn register_builtins(registry: &mut ToolRegistry) {
    registry.register(ls::Ls);
    registry.register(cd::Cd);
    registry.register(cat::Cat);
    registry.register(pwd::Pwd);
    registry.register(identity::Whoami);
    registry.register(uname::Uname);
    registry.register(sysinfo::Uptime);
    registry.register(sysinfo::Df);
    registry.register(sysinfo::Free);
    registry.register(sysinfo::Top::top());
    registry.register(sysinfo::Ps);
    registry.register(fetch::Fetch::fastfetch());
    registry.register(fetch::Fetch::neofetch());
    registry.register(setdistro::SetDistro);
    registry.register(ping::Ping);
    registry.register(tree::Tree);
    registry.register(mkdir::Mkdir);
    registry.register(touch::Touch);
    registry.register(rm::Rm);
    registry.register(echo::Echo);
    registry.register(date::Date);
    registry.register(identity::Hostname);
    registry.register(session::Clear);
    registry.register(session::Exit);
    registry.register(sysinfo::Top::htop());
    registry.register(help::Help);
}

/// Names are single path segments; `mkdir a/b` means `ab`.
fn strip_slashes(name: &str) -> String {
    name.replace('/', "")
}

/// `.` and `..` always mean navigation, never a stored child.
fn is_dot_entry(name: &str) -> bool {
    name == "." || name == ".."
}
