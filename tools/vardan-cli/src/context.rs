//! CLI execution context.

use std::path::{Path, PathBuf};
use std::rc::Rc;

use anyhow::{Context as _, Result};
use vardan_cache::FileStore;
use vardan_commerce::cart::{CartController, CartStore};
use vardan_commerce::catalog::PriceCatalog;

use crate::config::{CliConfig, CONFIG_NAMES};
use crate::output::Output;
use crate::terminal::{PrintedLink, TerminalPrompter};

/// Cart controller driven from the terminal.
pub type CliCart = CartController<FileStore, TerminalPrompter, PrintedLink>;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Config file in use, if any.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;
        Self::load_from(&cwd, config_path, output)
    }

    fn load_from(cwd: &Path, config_path: Option<&str>, output: Output) -> Result<Self> {
        let (config, config_path) = match config_path {
            Some(path) => {
                let path = resolve(cwd, Path::new(path));
                (CliConfig::load(&path)?, Some(path))
            }
            None => match find_config(cwd) {
                Some(path) => (CliConfig::load(&path)?, Some(path)),
                None => (CliConfig::default(), None),
            },
        };

        Ok(Self {
            config,
            config_path,
            output,
            cwd: cwd.to_path_buf(),
        })
    }

    /// Directory relative config paths are resolved against.
    pub fn base_dir(&self) -> &Path {
        self.config_path
            .as_deref()
            .and_then(Path::parent)
            .unwrap_or(&self.cwd)
    }

    /// Resolve a path from the config file.
    pub fn resolve_path(&self, path: &Path) -> PathBuf {
        resolve(self.base_dir(), path)
    }

    /// Load the configured price catalog.
    pub fn catalog(&self) -> Result<PriceCatalog> {
        let catalog = match &self.config.catalog.path {
            Some(path) => {
                let path = self.resolve_path(path);
                let source = std::fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read catalog: {}", path.display()))?;
                PriceCatalog::from_toml(&source)
                    .with_context(|| format!("Failed to load catalog: {}", path.display()))?
            }
            None => PriceCatalog::builtin().context("Failed to load the embedded catalog")?,
        };

        Ok(match self.config.catalog.sale {
            Some(enabled) => catalog.with_sale_enabled(enabled),
            None => catalog,
        })
    }

    /// Path of the offline cart file.
    pub fn cart_file(&self) -> PathBuf {
        self.resolve_path(&self.config.cart.file)
    }

    /// Open the offline cart with current catalog prices.
    pub fn cart(&self, assume_yes: bool) -> Result<CliCart> {
        let path = self.cart_file();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let file = FileStore::open(&path)
            .with_context(|| format!("Failed to open cart file: {}", path.display()))?;

        let mut store = CartStore::new(file, &self.config.store).with_catalog(Rc::new(self.catalog()?));
        store.load();
        self.output
            .debug(&format!("Loaded {} line(s) from {}", store.len(), path.display()));

        Ok(CartController::new(
            store,
            TerminalPrompter::new(self.output.clone(), assume_yes),
            PrintedLink::default(),
            self.config.store.clone(),
        ))
    }
}

fn resolve(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

/// Find config file in directory tree.
fn find_config(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        for name in CONFIG_NAMES {
            let candidate = current.join(name);
            if candidate.is_file() {
                return Some(candidate);
            }
        }

        if !current.pop() {
            return None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiet() -> Output {
        Output::new(false, true)
    }

    #[test]
    fn test_finds_config_in_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("vardan.toml"),
            "[store]\ncompany_name = \"Parent Shop\"\n\n[cart]\nfile = \"carts/main.json\"\n",
        )
        .unwrap();
        let nested = dir.path().join("site").join("pages");
        std::fs::create_dir_all(&nested).unwrap();

        let ctx = Context::load_from(&nested, None, quiet()).unwrap();
        assert_eq!(ctx.config.store.company_name, "Parent Shop");
        assert_eq!(ctx.cart_file(), dir.path().join("carts/main.json"));
    }

    #[test]
    fn test_defaults_without_config() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = Context::load_from(dir.path(), None, quiet()).unwrap();
        assert!(ctx.config_path.is_none());
        assert_eq!(ctx.cart_file(), dir.path().join(".vardan/cart.json"));
        assert_eq!(ctx.catalog().unwrap().len(), 39);
    }

    #[test]
    fn test_explicit_config_must_exist() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Context::load_from(dir.path(), Some("missing.toml"), quiet()).is_err());
    }

    #[test]
    fn test_custom_catalog_and_sale_override() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("prices.toml"),
            r#"
[sale]
enabled = false

[[products]]
name = "Neem Comb"
variants = [{ label = "default", price = 150, sale = 120 }]
"#,
        )
        .unwrap();
        std::fs::write(
            dir.path().join("vardan.toml"),
            "[catalog]\npath = \"prices.toml\"\nsale = true\n",
        )
        .unwrap();

        let ctx = Context::load_from(dir.path(), None, quiet()).unwrap();
        let catalog = ctx.catalog().unwrap();
        assert_eq!(catalog.len(), 1);
        assert!(catalog.sale_enabled());
        assert_eq!(catalog.formatted_price("Neem Comb", Some("default")).as_deref(), Some("\u{20b9}120"));
    }

    #[test]
    fn test_cart_persists_between_opens() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = Context::load_from(dir.path(), None, quiet()).unwrap();

        let mut cart = ctx.cart(true).unwrap();
        cart.add_variant("Shea Butter Soap", "100g", "");
        cart.add_variant("Shea Butter Soap", "100g", "");

        let reopened = ctx.cart(true).unwrap();
        assert_eq!(reopened.store().item_count(), 2);
        assert_eq!(reopened.store().total().display(), "\u{20b9}498");
        assert!(ctx.cart_file().exists());
    }
}
