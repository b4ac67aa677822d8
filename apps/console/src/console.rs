//! # Console
//!
//! The interactive display surface: reads one command per line, runs it
//! against the session and prints the result.
//!
//! ## Session Loop
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Console Session                                      │
//! │                                                                         │
//! │  Welcome to Kart Online Store!                                         │
//! │  > products                 ──► list_products()                        │
//! │  > add Apple 3              ──► add_to_cart("Apple", Some(3))          │
//! │  > update Apple 5           ──► update_cart_item("Apple", 5)           │
//! │  > remove Apple             ──► remove_from_cart("Apple")              │
//! │  > cart                     ──► get_cart()                             │
//! │  > order                    ──► prompts, then place_order()            │
//! │  > download [file]          ──► download_invoice()                     │
//! │  > quit                     ──► end of session (cart discarded)        │
//! │                                                                         │
//! │  Errors print "Error: <message>" and the loop keeps going.             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! With `--json`, every result is one JSON document per line and prompts
//! are not printed.

use std::io::{self, BufRead, Write};

use serde::Serialize;
use tracing::{debug, warn};

use crate::commands::cart::{self, CartResponse};
use crate::commands::catalog::list_products;
use crate::commands::config::get_config;
use crate::commands::order::{self, OrderRequest};
use crate::error::{ApiError, ErrorCode};
use crate::state::{SessionState, ShopState};

const HELP: &str = "\
Commands:
  products                  List available products
  cart                      Show the cart with totals
  add <product> [qty]       Add a product (default quantity 1)
  update <product> <qty>    Set the quantity of a product in the cart
  remove <product>          Remove a product from the cart
  clear                     Empty the cart
  order                     Enter customer details and generate the invoice
  download [file]           Show an invoice (default: the last one)
  config                    Show shop settings
  help                      Show this help
  quit                      Leave the store";

// =============================================================================
// Command Parsing
// =============================================================================

/// One parsed console line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Products,
    Cart,
    Add { product: String, quantity: Option<i64> },
    Update { product: String, quantity: i64 },
    Remove { product: String },
    Clear,
    Order,
    Download { file_name: Option<String> },
    Config,
    Help,
    Quit,
}

impl Command {
    /// Parses a console line. Blank lines yield `Ok(None)`.
    ///
    /// Product names may contain spaces; for `add` a trailing integer is
    /// taken as the quantity.
    pub fn parse(line: &str) -> Result<Option<Command>, ApiError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        let command = match verb.to_ascii_lowercase().as_str() {
            "products" | "list" => Command::Products,
            "cart" => Command::Cart,
            "add" => match split_quantity(rest) {
                (product, Some(Ok(quantity))) => Command::Add {
                    product: required(product, "add <product> [quantity]")?,
                    quantity: Some(quantity),
                },
                (_, Some(Err(bad))) => return Err(bad_quantity(&bad)),
                (_, None) => Command::Add {
                    product: required(rest, "add <product> [quantity]")?,
                    quantity: None,
                },
            },
            "update" => match split_quantity(rest) {
                (product, Some(Ok(quantity))) => Command::Update {
                    product: required(product, "update <product> <quantity>")?,
                    quantity,
                },
                (_, Some(Err(bad))) => return Err(bad_quantity(&bad)),
                (_, None) => return Err(usage("update <product> <quantity>")),
            },
            "remove" => Command::Remove {
                product: required(rest, "remove <product>")?,
            },
            "clear" => Command::Clear,
            "order" | "checkout" => Command::Order,
            "download" => Command::Download {
                file_name: (!rest.is_empty()).then(|| rest.to_string()),
            },
            "config" => Command::Config,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => {
                return Err(ApiError::validation(format!(
                    "Unknown command: {} (type 'help')",
                    other
                )))
            }
        };

        Ok(Some(command))
    }
}

/// Splits `"Samsung S22 3"` into `("Samsung S22", Some(Ok(3)))`.
///
/// The last token is only treated as a quantity when it looks numeric.
fn split_quantity(rest: &str) -> (&str, Option<Result<i64, String>>) {
    match rest.rsplit_once(char::is_whitespace) {
        Some((product, last)) if looks_numeric(last) => (
            product.trim(),
            Some(last.parse::<i64>().map_err(|_| last.to_string())),
        ),
        _ => (rest, None),
    }
}

fn looks_numeric(token: &str) -> bool {
    let digits = token.strip_prefix('-').unwrap_or(token);
    !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())
}

fn required(product: &str, form: &str) -> Result<String, ApiError> {
    if product.is_empty() {
        Err(usage(form))
    } else {
        Ok(product.to_string())
    }
}

fn usage(form: &str) -> ApiError {
    ApiError::validation(format!("Usage: {}", form))
}

fn bad_quantity(token: &str) -> ApiError {
    ApiError::new(ErrorCode::InvalidQuantity, format!("Invalid quantity: {}", token))
}

// =============================================================================
// Console Loop
// =============================================================================

/// Output style for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Interactive session over any line reader and writer.
pub struct Console<'a, R, W> {
    shop: &'a ShopState,
    session: SessionState,
    input: R,
    output: W,
    format: OutputFormat,
}

impl<'a, R: BufRead, W: Write> Console<'a, R, W> {
    pub fn new(shop: &'a ShopState, input: R, output: W, format: OutputFormat) -> Self {
        Console {
            shop,
            session: SessionState::new(),
            input,
            output,
            format,
        }
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    /// Runs until `quit` or end of input.
    pub fn run(&mut self) -> io::Result<()> {
        if self.format == OutputFormat::Text {
            writeln!(self.output, "Welcome to {}!", self.shop.config.store_name)?;
            writeln!(self.output, "Type 'help' for commands.")?;
        }

        loop {
            self.prompt("> ")?;
            let Some(line) = self.read_line()? else {
                break;
            };

            match Command::parse(&line) {
                Ok(None) => continue,
                Ok(Some(command)) => {
                    if !self.execute(command)? {
                        break;
                    }
                }
                Err(err) => self.print_error(&err)?,
            }
        }

        debug!(
            invoices = self.session.invoices().len(),
            "Session ended"
        );
        if self.format == OutputFormat::Text {
            writeln!(self.output, "Goodbye!")?;
        }
        self.output.flush()
    }

    /// Runs one command. Returns `false` on `quit` or when input ran out
    /// mid-command.
    fn execute(&mut self, command: Command) -> io::Result<bool> {
        let shop = self.shop;

        match command {
            Command::Products => {
                let products = list_products(shop);
                match self.format {
                    OutputFormat::Json => self.print_json(&products)?,
                    OutputFormat::Text => {
                        writeln!(self.output, "Available Products:")?;
                        for product in &products {
                            writeln!(self.output, "  {:<12} {}", product.name, product.unit_price)?;
                        }
                    }
                }
            }
            Command::Cart => {
                let cart = cart::get_cart(shop, &self.session);
                self.print_cart(&cart)?;
            }
            Command::Add { product, quantity } => {
                let result = cart::add_to_cart(shop, &mut self.session, &product, quantity);
                let message = format!("Added {} x {} to cart.", quantity.unwrap_or(1), product);
                self.report(result, &message)?;
            }
            Command::Update { product, quantity } => {
                let result = cart::update_cart_item(shop, &mut self.session, &product, quantity);
                let message = format!("Updated {} quantity to {}.", product, quantity);
                self.report(result, &message)?;
            }
            Command::Remove { product } => {
                let result = cart::remove_from_cart(shop, &mut self.session, &product);
                let message = format!("Removed {} from cart.", product);
                self.report(result, &message)?;
            }
            Command::Clear => {
                let result = cart::clear_cart(shop, &mut self.session);
                self.report(Ok(result), "Cart cleared successfully!")?;
            }
            Command::Order => return self.order(),
            Command::Download { file_name } => {
                match order::download_invoice(shop, &self.session, file_name.as_deref()) {
                    Ok(download) => match self.format {
                        OutputFormat::Json => self.print_json(&download)?,
                        OutputFormat::Text => {
                            writeln!(self.output, "----- {} -----", download.file_name)?;
                            write!(self.output, "{}", download.contents)?;
                        }
                    },
                    Err(err) => self.print_error(&err)?,
                }
            }
            Command::Config => {
                let config = get_config(shop);
                match self.format {
                    OutputFormat::Json => self.print_json(&config)?,
                    OutputFormat::Text => {
                        writeln!(self.output, "Store: {}", config.store_name)?;
                        writeln!(self.output, "GST: {}", config.gst_rate())?;
                        writeln!(self.output, "Invoice directory: {}", config.invoice_dir.display())?;
                    }
                }
            }
            Command::Help => writeln!(self.output, "{}", HELP)?,
            Command::Quit => return Ok(false),
        }

        Ok(true)
    }

    /// Collects customer details and places the order.
    fn order(&mut self) -> io::Result<bool> {
        // Fail fast so the customer isn't asked for details first
        if self.session.cart.is_empty() {
            let err = ApiError::from(kart_core::ValidationError::EmptyCart);
            self.print_error(&err)?;
            return Ok(true);
        }

        let Some(customer_name) = self.ask("Customer name: ")? else {
            return Ok(false);
        };
        let Some(phone) = self.ask("Phone number: ")? else {
            return Ok(false);
        };
        let Some(file_name) = self.ask("Invoice file name (without .txt): ")? else {
            return Ok(false);
        };

        let request = OrderRequest {
            customer_name,
            phone,
            file_name,
        };

        match order::place_order(self.shop, &mut self.session, &request) {
            Ok(placed) => match self.format {
                OutputFormat::Json => self.print_json(&placed)?,
                OutputFormat::Text => {
                    writeln!(
                        self.output,
                        "Order placed! Invoice generated: {}",
                        placed.artifact.file_name
                    )?;
                    writeln!(self.output, "Total Amount: {}", placed.invoice.grand_total)?;
                }
            },
            Err(err) => self.print_error(&err)?,
        }

        Ok(true)
    }

    fn report(&mut self, result: Result<CartResponse, ApiError>, message: &str) -> io::Result<()> {
        match result {
            Ok(cart) => match self.format {
                OutputFormat::Json => self.print_json(&cart),
                OutputFormat::Text => writeln!(self.output, "{}", message),
            },
            Err(err) => self.print_error(&err),
        }
    }

    fn print_cart(&mut self, cart: &CartResponse) -> io::Result<()> {
        if self.format == OutputFormat::Json {
            return self.print_json(cart);
        }

        if cart.items.is_empty() {
            return writeln!(self.output, "Cart is empty.");
        }

        writeln!(self.output, "Your Cart:")?;
        for line in &cart.items {
            writeln!(
                self.output,
                "  {} - {} pcs - {}",
                line.product_name,
                line.quantity,
                line.line_total()
            )?;
        }
        let totals = &cart.totals;
        writeln!(self.output, "Subtotal: {}", totals.subtotal)?;
        writeln!(self.output, "GST ({}): {}", totals.gst_rate, totals.gst_amount)?;
        writeln!(self.output, "Total: {}", totals.total)
    }

    fn print_error(&mut self, err: &ApiError) -> io::Result<()> {
        warn!(code = ?err.code, message = %err.message, "Command failed");
        match self.format {
            OutputFormat::Json => self.print_json(err),
            OutputFormat::Text => writeln!(self.output, "Error: {}", err.message),
        }
    }

    fn print_json<T: Serialize + ?Sized>(&mut self, value: &T) -> io::Result<()> {
        serde_json::to_writer(&mut self.output, value)?;
        writeln!(self.output)
    }

    fn prompt(&mut self, text: &str) -> io::Result<()> {
        if self.format == OutputFormat::Text {
            write!(self.output, "{}", text)?;
            self.output.flush()?;
        }
        Ok(())
    }

    /// Customer answers are passed on as typed; only the invoice file name
    /// is trimmed, by the store.
    fn ask(&mut self, text: &str) -> io::Result<Option<String>> {
        self.prompt(text)?;
        self.read_line()
    }

    /// Next line without its terminator, or `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}
