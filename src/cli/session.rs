//! src/cli/session.rs
//! Prompt loop: one validated field at a time. ENTER (or EOF) quits, bad
//! input re-prompts, a failed file operation keeps the session alive.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::cipher::{Algorithm, CipherParams, Direction, Mode};
use crate::consts::{AES_KEY_SIZES, BMP_EXTENSION, DES_KEY_SIZE_BITS};
use crate::error::ImgcryptError;
use crate::keystore::KeyStore;
use crate::processor::{self, FileType};

/// One interactive console session over generic handles.
pub struct Session<R, W> {
    input: R,
    out: W,
    store: KeyStore,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, out: W, store: KeyStore) -> Self {
        Self { input, out, store }
    }

    /// Run prompt rounds until the user quits.
    pub fn run(&mut self) -> Result<(), ImgcryptError> {
        loop {
            match self.one_round() {
                Ok(true) => {}
                Ok(false) => return Ok(()),
                // Abort the current operation, keep the session alive.
                Err(e) => writeln!(self.out, "[ERROR] {e}")?,
            }
        }
    }

    /// One full field sequence plus the file operation.
    /// Returns `false` once the user quit.
    fn one_round(&mut self) -> Result<bool, ImgcryptError> {
        let Some(direction) = self.prompt_operation()? else {
            return Ok(false);
        };
        let Some(mode) = self.prompt_mode()? else {
            return Ok(false);
        };

        let (key, params) = match direction {
            Direction::Encrypt => {
                let Some(algorithm) = self.prompt_algorithm()? else {
                    return Ok(false);
                };
                let Some(bits) = self.prompt_key_size(algorithm)? else {
                    return Ok(false);
                };
                let key = KeyStore::generate(algorithm, bits)?;
                let path = self.store.persist(&key)?;
                writeln!(self.out, "Key saved to: {}", path.display())?;
                (key, CipherParams::new(algorithm, mode, bits)?)
            }
            Direction::Decrypt => {
                let Some(key_path) = self.prompt_existing_path(
                    "Enter key file path for decryption (e.g. 'encryptionKey.des' or 'encryptionKey.aes') [ENTER to quit]: ",
                )? else {
                    return Ok(false);
                };
                let algorithm = KeyStore::algorithm_for_path(&key_path)?;
                let key = KeyStore::load(&key_path)?;
                let params = CipherParams::new(algorithm, mode, key.size_bits())?;
                (key, params)
            }
        };

        let Some(file_type) = self.prompt_file_type()? else {
            return Ok(false);
        };
        let Some(input_path) =
            self.prompt_existing_path("Enter input file path [ENTER to quit]: ")?
        else {
            return Ok(false);
        };
        let Some(output_path) = self.prompt_output_path(file_type)? else {
            return Ok(false);
        };

        processor::process(&input_path, &output_path, &key, &params, direction, file_type)?;

        let verb = match direction {
            Direction::Encrypt => "Encrypted",
            Direction::Decrypt => "Decrypted",
        };
        writeln!(self.out, "{verb} successfully to: {}\n", output_path.display())?;
        Ok(true)
    }

    fn prompt_operation(&mut self) -> Result<Option<Direction>, ImgcryptError> {
        Ok(self
            .prompt_choice("Choose operation (1 - Encrypt, 2 - Decrypt) [ENTER to quit]: ", 2)?
            .map(|c| match c {
                1 => Direction::Encrypt,
                _ => Direction::Decrypt,
            }))
    }

    fn prompt_mode(&mut self) -> Result<Option<Mode>, ImgcryptError> {
        Ok(self
            .prompt_choice("Choose mode (1 - ECB, 2 - CBC) [ENTER to quit]: ", 2)?
            .map(|c| match c {
                1 => Mode::Ecb,
                _ => Mode::Cbc,
            }))
    }

    fn prompt_algorithm(&mut self) -> Result<Option<Algorithm>, ImgcryptError> {
        Ok(self
            .prompt_choice("Choose algorithm (1 - AES, 2 - DES) [ENTER to quit]: ", 2)?
            .map(|c| match c {
                1 => Algorithm::Aes,
                _ => Algorithm::Des,
            }))
    }

    fn prompt_file_type(&mut self) -> Result<Option<FileType>, ImgcryptError> {
        Ok(self
            .prompt_choice("Choose file type (1 - BMP image, 2 - Other) [ENTER to quit]: ", 2)?
            .map(|c| match c {
                1 => FileType::Image,
                _ => FileType::Other,
            }))
    }

    /// AES prompts for 128/192/256; DES is fixed at 56 bits.
    fn prompt_key_size(&mut self, algorithm: Algorithm) -> Result<Option<u32>, ImgcryptError> {
        if algorithm == Algorithm::Des {
            return Ok(Some(DES_KEY_SIZE_BITS));
        }
        loop {
            let Some(line) =
                self.prompt_line("Enter AES key size (128, 192, 256) [ENTER to quit]: ")?
            else {
                return Ok(None);
            };
            match line.parse::<u32>() {
                Ok(bits) if AES_KEY_SIZES.contains(&bits) => return Ok(Some(bits)),
                Ok(_) => writeln!(self.out, "Invalid key size. Please enter 128, 192 or 256.")?,
                Err(_) => {
                    writeln!(self.out, "Invalid input. Please enter a valid AES key size.")?
                }
            }
        }
    }

    /// Numeric menu choice in `1..=max`; `None` on an empty line.
    fn prompt_choice(&mut self, prompt: &str, max: u32) -> Result<Option<u32>, ImgcryptError> {
        loop {
            let Some(line) = self.prompt_line(prompt)? else {
                return Ok(None);
            };
            match line.parse::<u32>() {
                Ok(choice) if (1..=max).contains(&choice) => return Ok(Some(choice)),
                Ok(_) => writeln!(self.out, "Invalid choice. Please try again.")?,
                Err(_) => writeln!(self.out, "Invalid input. Please try again.")?,
            }
        }
    }

    /// Re-prompts until the given path exists on disk.
    fn prompt_existing_path(&mut self, prompt: &str) -> Result<Option<PathBuf>, ImgcryptError> {
        loop {
            let Some(line) = self.prompt_line(prompt)? else {
                return Ok(None);
            };
            let path = PathBuf::from(line);
            if path.exists() {
                return Ok(Some(path));
            }
            writeln!(self.out, "File not found. Please try again.")?;
        }
    }

    fn prompt_output_path(&mut self, file_type: FileType) -> Result<Option<PathBuf>, ImgcryptError> {
        let Some(line) = self.prompt_line("Enter output file path [ENTER to quit]: ")? else {
            return Ok(None);
        };
        Ok(Some(resolve_output_path(&line, file_type)))
    }

    /// One trimmed input line; `None` when it is empty or the input ended.
    fn prompt_line(&mut self, prompt: &str) -> Result<Option<String>, ImgcryptError> {
        write!(self.out, "{prompt}")?;
        self.out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let line = line.trim();
        if line.is_empty() {
            Ok(None)
        } else {
            Ok(Some(line.to_string()))
        }
    }
}

/// Image outputs with no extension get `.bmp` appended.
pub fn resolve_output_path(raw: &str, file_type: FileType) -> PathBuf {
    if file_type == FileType::Image && !raw.contains('.') {
        PathBuf::from(format!("{raw}.{BMP_EXTENSION}"))
    } else {
        PathBuf::from(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_output_defaults_to_bmp() {
        assert_eq!(
            resolve_output_path("encrypted", FileType::Image),
            PathBuf::from("encrypted.bmp")
        );
    }

    #[test]
    fn explicit_extension_wins() {
        assert_eq!(
            resolve_output_path("encrypted.png", FileType::Image),
            PathBuf::from("encrypted.png")
        );
    }

    #[test]
    fn non_image_output_is_untouched() {
        assert_eq!(
            resolve_output_path("archive", FileType::Other),
            PathBuf::from("archive")
        );
    }
}
