//! # Interactive Shell
//!
//! The numbered menu loop. All prompting, parsing and re-prompting happens
//! here; the session only ever sees typed values.
//!
//! ## Menu Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Shell::run                                     │
//! │                                                                         │
//! │   ┌──────────┐   1  View products ──► products table                    │
//! │   │   menu   │   2  Add to cart ────► id ─► quantity ─► add_to_cart     │
//! │   │  prompt  │──►3  View cart ──────► cart table + total                │
//! │   └────▲─────┘   4  Checkout ───────► cart ─► y/n ─► checkout ─► receipt│
//! │        │         5  Sales history ──► sales report                      │
//! │        │         6  Exit                                                │
//! │        └──────────── every action returns to the menu                   │
//! │                                                                         │
//! │   End of input at any prompt leaves the loop cleanly.                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The shell is generic over its input and output so tests can drive it with
//! a script and inspect what was printed.

use std::fmt::Display;
use std::io::{BufRead, Write};
use std::str::FromStr;

use storefront_core::{ProductId, Session};
use tracing::{debug, info};

use crate::config::StoreConfig;
use crate::error::CliResult;
use crate::render;

/// A menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    ViewProducts,
    AddToCart,
    ViewCart,
    Checkout,
    SalesHistory,
    Exit,
}

impl MenuChoice {
    const ALL: [MenuChoice; 6] = [
        MenuChoice::ViewProducts,
        MenuChoice::AddToCart,
        MenuChoice::ViewCart,
        MenuChoice::Checkout,
        MenuChoice::SalesHistory,
        MenuChoice::Exit,
    ];

    fn from_number(n: i64) -> Option<Self> {
        usize::try_from(n)
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| Self::ALL.get(i).copied())
    }

    fn label(self) -> &'static str {
        match self {
            MenuChoice::ViewProducts => "View products",
            MenuChoice::AddToCart => "Add product to cart",
            MenuChoice::ViewCart => "View cart",
            MenuChoice::Checkout => "Checkout",
            MenuChoice::SalesHistory => "Sales history",
            MenuChoice::Exit => "Exit",
        }
    }
}

/// Console front end over one [`Session`].
pub struct Shell<R, W> {
    session: Session,
    config: StoreConfig,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(session: Session, config: StoreConfig, input: R, output: W) -> Self {
        Shell {
            session,
            config,
            input,
            output,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Hands back the session and the output sink.
    pub fn into_parts(self) -> (Session, W) {
        (self.session, self.output)
    }

    /// Runs the menu until the user exits or input ends.
    ///
    /// Core errors from an action are printed and the loop continues. Only
    /// console I/O failures are returned.
    pub fn run(&mut self) -> CliResult<()> {
        info!(store = %self.config.store.name, "Shell started");

        loop {
            self.print_menu()?;

            let max = MenuChoice::ALL.len();
            let Some(option) = self.read_number::<i64>(&format!("Select an option (1-{}): ", max), 1)? else {
                debug!("Input closed at menu");
                writeln!(self.output)?;
                return Ok(());
            };

            let Some(choice) = MenuChoice::from_number(option) else {
                writeln!(self.output, "Invalid option. Choose between 1 and {}.\n", max)?;
                continue;
            };
            debug!(?choice, "Menu option selected");

            match choice {
                MenuChoice::ViewProducts => self.show_products()?,
                MenuChoice::AddToCart => self.add_to_cart()?,
                MenuChoice::ViewCart => self.show_cart()?,
                MenuChoice::Checkout => self.checkout()?,
                MenuChoice::SalesHistory => self.show_sales()?,
                MenuChoice::Exit => {
                    writeln!(self.output, "Thank you for shopping with us.")?;
                    info!(sales = self.session.sales().len(), "Shell finished");
                    return Ok(());
                }
            }
        }
    }

    // =========================================================================
    // Menu Actions
    // =========================================================================

    fn print_menu(&mut self) -> CliResult<()> {
        writeln!(self.output, "===== {} =====", self.config.store.name.to_uppercase())?;
        for (i, choice) in MenuChoice::ALL.iter().enumerate() {
            writeln!(self.output, "{}) {}", i + 1, choice.label())?;
        }
        Ok(())
    }

    fn show_products(&mut self) -> CliResult<()> {
        writeln!(self.output, "\n=== PRODUCTS ===")?;
        if self.session.catalog().is_empty() {
            writeln!(self.output, "No products in the catalog.\n")?;
            return Ok(());
        }
        writeln!(
            self.output,
            "{}\n",
            render::products_table(self.session.catalog(), &self.config)
        )?;
        Ok(())
    }

    fn add_to_cart(&mut self) -> CliResult<()> {
        writeln!(self.output, "\n=== ADD TO CART ===")?;

        let Some(raw_id) = self.read_number::<i64>("Product ID: ", 1)? else {
            return Ok(());
        };
        let product = u32::try_from(raw_id)
            .ok()
            .map(ProductId::new)
            .and_then(|id| self.session.catalog().get(id))
            .map(|p| (p.id(), p.name().to_string()));
        let Some((id, name)) = product else {
            writeln!(self.output, "Product not found.\n")?;
            return Ok(());
        };

        let available = self.session.available(id)?;
        if available == 0 {
            writeln!(self.output, "No stock available for {}.\n", name)?;
            return Ok(());
        }

        let prompt = format!("Quantity (available: {}): ", available);
        let Some(quantity) = self.read_number::<i64>(&prompt, 1)? else {
            return Ok(());
        };

        match self.session.add_to_cart(id, quantity) {
            Ok(()) => writeln!(self.output, "Added: {} x {}.\n", name, quantity)?,
            Err(err) => writeln!(self.output, "Error: {}\n", err)?,
        }
        Ok(())
    }

    fn show_cart(&mut self) -> CliResult<()> {
        writeln!(self.output, "\n=== CART ===")?;
        if self.session.cart().is_empty() {
            writeln!(self.output, "Your cart is empty.\n")?;
            return Ok(());
        }
        writeln!(
            self.output,
            "{}\n",
            render::cart_table(self.session.cart(), &self.config)
        )?;
        Ok(())
    }

    fn checkout(&mut self) -> CliResult<()> {
        if self.session.cart().is_empty() {
            writeln!(self.output, "\nYour cart is empty. Add products before checking out.\n")?;
            return Ok(());
        }

        self.show_cart()?;
        let Some(answer) = self.read_choice("Confirm purchase? (y/n): ", &["y", "n"])? else {
            return Ok(());
        };
        if answer == "n" {
            writeln!(self.output, "Purchase cancelled.\n")?;
            return Ok(());
        }

        match self.session.checkout() {
            Ok(receipt) => {
                writeln!(self.output, "\n{}", render::receipt(&receipt, &self.config))?;
                writeln!(self.output, "Purchase completed successfully!\n")?;
            }
            Err(err) => {
                writeln!(self.output, "Could not complete the purchase: {}", err)?;
                writeln!(self.output, "Hint: check available stock or adjust your cart.\n")?;
            }
        }
        Ok(())
    }

    fn show_sales(&mut self) -> CliResult<()> {
        writeln!(self.output, "\n=== SALES HISTORY ===")?;
        if self.session.sales().is_empty() {
            writeln!(self.output, "No sales recorded in this session.\n")?;
            return Ok(());
        }
        writeln!(
            self.output,
            "{}\n",
            render::sales_report(self.session.sales(), &self.config)
        )?;
        Ok(())
    }

    // =========================================================================
    // Input Helpers
    // =========================================================================

    /// Prints `message` and reads one trimmed line. `None` at end of input.
    fn prompt(&mut self, message: &str) -> CliResult<Option<String>> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Reads a whole number ≥ `min`, re-prompting until one is given.
    fn read_number<T>(&mut self, message: &str, min: T) -> CliResult<Option<T>>
    where
        T: FromStr + PartialOrd + Display + Copy,
    {
        loop {
            let Some(entry) = self.prompt(message)? else {
                return Ok(None);
            };

            match entry.parse::<T>() {
                Ok(value) if value >= min => return Ok(Some(value)),
                Ok(_) => writeln!(self.output, "Enter a whole number >= {}.", min)?,
                Err(_) => writeln!(self.output, "Invalid input. Enter a whole number.")?,
            }
        }
    }

    /// Reads one of `options` (case-insensitive), re-prompting otherwise.
    fn read_choice(&mut self, message: &str, options: &[&str]) -> CliResult<Option<String>> {
        loop {
            let Some(entry) = self.prompt(message)? else {
                return Ok(None);
            };

            let entry = entry.to_lowercase();
            if options.contains(&entry.as_str()) {
                return Ok(Some(entry));
            }
            writeln!(self.output, "Invalid option. Use: {}.", options.join(", "))?;
        }
    }
}
