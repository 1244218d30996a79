use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Allocate, Assign, CreateAccount, Transfer};

use crate::{
    address::device_address,
    constants::DEVICE_SEED,
    errors::ErrorCode,
    state::{Device, DeviceRegistered},
};

/// Check that `account` is the device slot for `beacon_id`, returning its bump.
pub fn check_device_address(account: &AccountInfo, beacon_id: &str) -> Result<u8> {
    let (expected, bump) = device_address(beacon_id, &crate::ID)?;
    require_keys_eq!(*account.key, expected, ErrorCode::DeviceMismatch);
    Ok(bump)
}

/// Lamports the payer must move into a new record, or `AllocationFailed`
/// when it cannot cover them.
pub fn creation_shortfall(
    rent_minimum: u64,
    record_lamports: u64,
    payer_lamports: u64,
) -> Result<u64> {
    let shortfall = rent_minimum.saturating_sub(record_lamports);
    require!(payer_lamports >= shortfall, ErrorCode::AllocationFailed);
    Ok(shortfall)
}

/// Make sure a device record exists for `beacon_id`.
///
/// Creates and pays for the record on first contact; otherwise returns the
/// stored record untouched. The second flag is `true` when it was created.
pub fn ensure_device<'info>(
    device: &AccountInfo<'info>,
    payer: &AccountInfo<'info>,
    system_program: &AccountInfo<'info>,
    beacon_id: &str,
    now: i64,
) -> Result<(Device, bool)> {
    let bump = check_device_address(device, beacon_id)?;

    if !device.data_is_empty() {
        return Ok((load_device(device, beacon_id)?, false));
    }

    let rent_minimum = Rent::get()?.minimum_balance(Device::SPACE);
    let shortfall = creation_shortfall(rent_minimum, device.lamports(), payer.lamports())?;

    let bump_seed = [bump];
    let signer_seeds: &[&[&[u8]]] = &[&[DEVICE_SEED, beacon_id.as_bytes(), &bump_seed]];

    if device.lamports() == 0 {
        system_program::create_account(
            CpiContext::new_with_signer(
                system_program.clone(),
                CreateAccount {
                    from: payer.clone(),
                    to: device.clone(),
                },
                signer_seeds,
            ),
            shortfall,
            Device::SPACE as u64,
            &crate::ID,
        )?;
    } else {
        // Someone already sent lamports to the address; create_account
        // refuses funded accounts, so top up and claim it step by step.
        if shortfall > 0 {
            system_program::transfer(
                CpiContext::new(
                    system_program.clone(),
                    Transfer {
                        from: payer.clone(),
                        to: device.clone(),
                    },
                ),
                shortfall,
            )?;
        }
        system_program::allocate(
            CpiContext::new_with_signer(
                system_program.clone(),
                Allocate {
                    account_to_allocate: device.clone(),
                },
                signer_seeds,
            ),
            Device::SPACE as u64,
        )?;
        system_program::assign(
            CpiContext::new_with_signer(
                system_program.clone(),
                Assign {
                    account_to_assign: device.clone(),
                },
                signer_seeds,
            ),
            &crate::ID,
        )?;
    }

    let record = Device::new(beacon_id.to_string(), bump, now);
    store_device(device, &record)?;

    emit!(DeviceRegistered {
        device: *device.key,
        beacon_id: record.beacon_id.clone(),
        created_at: now,
        payer: *payer.key,
    });
    msg!("Device registered: {} -> {}", beacon_id, device.key);

    Ok((record, true))
}

/// Load the device record for `beacon_id`; `NotFound` if it was never created.
pub fn load_device(account: &AccountInfo, beacon_id: &str) -> Result<Device> {
    check_device_address(account, beacon_id)?;
    let device: Device = load_record(account)?;
    require!(device.beacon_id == beacon_id, ErrorCode::DeviceMismatch);
    Ok(device)
}

pub fn store_device(account: &AccountInfo, device: &Device) -> Result<()> {
    let mut data = account.try_borrow_mut_data()?;
    let mut writer: &mut [u8] = &mut data[..];
    device.try_serialize(&mut writer)?;
    Ok(())
}

/// Deserialize a record owned by this program, or fail with `NotFound` if
/// the address holds nothing yet.
pub fn load_record<T: AccountDeserialize + Owner>(account: &AccountInfo) -> Result<T> {
    if account.data_is_empty() || *account.owner != T::owner() {
        return err!(ErrorCode::NotFound);
    }
    let data = account.try_borrow_data()?;
    let mut slice: &[u8] = &data[..];
    T::try_deserialize(&mut slice)
}
