extern crate std;

use std::vec::Vec;

use crate::error::Error;
use crate::interface::{Interface, sealed};

#[derive(Clone, Debug)]
pub(crate) struct MockInterface {
    regs: [u8; 256],
    writes: Vec<(u8, u8)>,
    write_bursts: Vec<(u8, Vec<u8>)>,
    read_faults: Vec<u8>,
    write_faults: Vec<u8>,
}

impl Default for MockInterface {
    fn default() -> Self {
        Self {
            regs: [0u8; 256],
            writes: Vec::new(),
            write_bursts: Vec::new(),
            read_faults: Vec::new(),
            write_faults: Vec::new(),
        }
    }
}

impl MockInterface {
    pub(crate) fn with_reg(mut self, reg: u8, value: u8) -> Self {
        self.set_reg(reg, value);
        self
    }

    /// Makes every read touching `reg` fail with a bus error.
    pub(crate) fn with_read_fault(mut self, reg: u8) -> Self {
        self.read_faults.push(reg);
        self
    }

    /// Makes every write touching `reg` fail with a bus error.
    #[allow(dead_code)]
    pub(crate) fn with_write_fault(mut self, reg: u8) -> Self {
        self.write_faults.push(reg);
        self
    }

    pub(crate) fn set_reg(&mut self, reg: u8, value: u8) {
        self.regs[reg as usize] = value;
    }

    pub(crate) fn reg(&self, reg: u8) -> u8 {
        self.regs[reg as usize]
    }

    pub(crate) fn writes(&self) -> &[(u8, u8)] {
        &self.writes
    }

    #[allow(dead_code)]
    pub(crate) fn write_bursts(&self) -> &[(u8, Vec<u8>)] {
        &self.write_bursts
    }
}

impl Interface for MockInterface {
    fn read_reg(&mut self, reg: u8) -> Result<u8, Error> {
        if self.read_faults.contains(&reg) {
            return Err(Error::Bus);
        }
        Ok(self.regs[reg as usize])
    }

    fn read_regs(&mut self, reg: u8, buffer: &mut [u8]) -> Result<(), Error> {
        if buffer.is_empty() {
            return Ok(());
        }
        for (offset, slot) in buffer.iter_mut().enumerate() {
            let addr = reg.wrapping_add(offset as u8);
            if self.read_faults.contains(&addr) {
                return Err(Error::Bus);
            }
            *slot = self.regs[addr as usize];
        }
        Ok(())
    }

    fn write_reg(&mut self, reg: u8, value: u8) -> Result<(), Error> {
        if self.write_faults.contains(&reg) {
            return Err(Error::Bus);
        }
        self.regs[reg as usize] = value;
        self.writes.push((reg, value));
        Ok(())
    }

    fn write_regs(&mut self, reg: u8, data: &[u8]) -> Result<(), Error> {
        if data.is_empty() {
            return Ok(());
        }
        for (offset, value) in data.iter().enumerate() {
            let addr = reg.wrapping_add(offset as u8);
            if self.write_faults.contains(&addr) {
                return Err(Error::Bus);
            }
            self.regs[addr as usize] = *value;
        }
        self.write_bursts.push((reg, data.to_vec()));
        Ok(())
    }
}

impl sealed::Sealed for MockInterface {}
