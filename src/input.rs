use std::io::BufRead;

use log::debug;

use crate::errors::BackwardsError;

/// Lê exatamente uma linha de `reader`, sem o `\n` (ou `\r\n`) final.
///
/// Fim de arquivo sem nenhum byte lido é `MissingInput`; uma linha vazia é
/// uma entrada válida.
pub fn read_line<R: BufRead>(reader: &mut R) -> Result<String, BackwardsError>
{
    let mut buffer = Vec::new();
    let read = reader.read_until(b'\n', &mut buffer)?;

    if read == 0
    {
        return Err(BackwardsError::MissingInput);
    }

    if buffer.last() == Some(&b'\n')
    {
        buffer.pop();
        if buffer.last() == Some(&b'\r')
        {
            buffer.pop();
        }
    }

    debug!("lidos {} bytes da entrada", read);
    Ok(String::from_utf8(buffer)?)
}

/// Usa as palavras da linha de comando, se houver, ou cai para `reader`.
pub fn resolve<R: BufRead>(words: &[String], reader: &mut R) -> Result<String, BackwardsError>
{
    if words.is_empty()
    {
        read_line(reader)
    }
    else
    {
        Ok(words.join(" "))
    }
}
