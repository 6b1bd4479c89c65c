mod register;
mod settings;
mod system;
mod views;

use super::registry::CommandRegistry;

pub(crate) fn register_all(registry: &mut CommandRegistry) {
    for entry in views::definitions()
        .into_iter()
        .chain(register::definitions())
        .chain(settings::definitions())
        .chain(system::definitions())
    {
        registry.register(entry);
    }
}
