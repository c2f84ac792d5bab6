use bookinn_common::config::Config;
use bookinn_common::success;
use bookinn_core::models::Customer;
use bookinn_core::store::JsonFileStore;

use crate::commands::{CustomerAction, recover};
use crate::terminal::print;

const KEY_WIDTH: usize = "Customer ID".len();

pub fn customer(action: CustomerAction, cfg: &Config) -> anyhow::Result<()> {
    let store = JsonFileStore::open(&cfg.data_dir)?;

    match action {
        CustomerAction::Create { id, name, email } => {
            if let Some(customer) = recover(Customer::create(&store, &id, &name, &email))? {
                success!("Created customer {}", customer.customer_id);
                show(&customer);
            }
        }
        CustomerAction::Show { id } => {
            if let Some(customer) = recover(Customer::load(&store, &id))? {
                show(&customer);
            }
        }
        CustomerAction::Update { id, name, email } => {
            let Some(mut customer) = recover(Customer::load(&store, &id))? else {
                return Ok(());
            };
            if recover(customer.update_details(&store, name.as_deref(), email.as_deref()))?.is_some() {
                success!("Updated customer {}", customer.customer_id);
                show(&customer);
            }
        }
        CustomerAction::Delete { id } => {
            if recover(Customer::delete(&store, &id))?.is_some() {
                success!("Deleted customer {id}");
            }
        }
    }
    Ok(())
}

fn show(customer: &Customer) {
    print::set_key_width(KEY_WIDTH);
    print::aligned_line("Customer ID", customer.customer_id.as_str());
    print::aligned_line("Name", customer.name.as_str());
    print::aligned_line("Email", customer.email.as_str());
}
