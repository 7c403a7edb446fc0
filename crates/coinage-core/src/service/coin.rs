//! Coin service. A coin owns a replaceable set of duties.

use crate::{
  id::{CoinId, EntityKind},
  model::{Coin, CoinPatch, NewCoin, UniqueField, require_text},
  resolve::resolve,
  service::{ensure_vacant, not_found},
  tables::Tables,
  view::{CoinView, coin_view},
};

pub fn list<T: Tables>(tables: &T) -> Result<Vec<CoinView>, T::Error> {
  tables
    .coins()?
    .into_iter()
    .map(|coin| coin_view(tables, coin))
    .collect()
}

pub fn create<T: Tables>(tables: &mut T, input: NewCoin) -> Result<CoinView, T::Error> {
  require_text("coin_name", &input.coin_name)?;
  ensure_vacant(tables.coin_by_name(&input.coin_name)?, None, &input.coin_name)?;

  let duties = match &input.duty_names {
    Some(names) => resolve(names, |name| tables.duty_by(UniqueField::Name, name))?,
    None => Vec::new(),
  };

  let coin = Coin { id: CoinId::new(), coin_name: input.coin_name };
  tables.insert_coin(&coin)?;
  for duty in &duties {
    tables.link_coin_duty(coin.id, duty.id)?;
  }

  coin_view(tables, coin)
}

pub fn get<T: Tables>(tables: &T, id: CoinId) -> Result<CoinView, T::Error> {
  let coin = fetch(tables, id)?;
  coin_view(tables, coin)
}

pub fn update<T: Tables>(
  tables: &mut T,
  id: CoinId,
  patch: CoinPatch,
) -> Result<CoinView, T::Error> {
  let mut coin = fetch(tables, id)?;

  if let Some(name) = patch.coin_name {
    require_text("coin_name", &name)?;
    ensure_vacant(tables.coin_by_name(&name)?, Some(id), &name)?;
    coin.coin_name = name;
  }

  // Resolve the whole replacement set before dropping the current one.
  let replacement = match &patch.duty_names {
    Some(names) => Some(resolve(names, |name| tables.duty_by(UniqueField::Name, name))?),
    None => None,
  };

  tables.update_coin(&coin)?;
  if let Some(duties) = replacement {
    tables.clear_coin_duties(id)?;
    for duty in &duties {
      tables.link_coin_duty(id, duty.id)?;
    }
  }

  coin_view(tables, coin)
}

pub fn delete<T: Tables>(tables: &mut T, id: CoinId) -> Result<(), T::Error> {
  fetch(tables, id)?;
  tables.delete_coin(id)
}

fn fetch<T: Tables>(tables: &T, id: CoinId) -> Result<Coin, T::Error> {
  tables
    .coin(id)?
    .ok_or_else(|| not_found(EntityKind::Coin, id.as_uuid()).into())
}
