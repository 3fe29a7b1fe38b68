//! The single-page UI, served as one static document from `GET /`.

pub const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Multimodal AI Design Agent Team</title>
<style>
  body { font-family: system-ui, sans-serif; max-width: 860px; margin: 0 auto; padding: 1.5rem; color: #1a1a2e; }
  h1 { font-size: 1.5rem; }
  h2 { font-size: 1.1rem; margin-top: 1.6rem; }
  fieldset { border: 1px solid #d0d0e0; border-radius: 8px; margin-top: 1rem; padding: 1rem; }
  legend { font-weight: 600; }
  label { display: block; margin: 0.3rem 0; }
  input[type=password], textarea { width: 100%; box-sizing: border-box; padding: 0.5rem; border: 1px solid #c0c0d0; border-radius: 6px; }
  textarea { min-height: 4rem; }
  button { padding: 0.5rem 1rem; border: 0; border-radius: 6px; background: #007BFF; color: #fff; cursor: pointer; }
  button:hover { background: #016FE6; }
  button:disabled { background: #9ab; cursor: wait; }
  .inline { display: inline-block; margin-right: 1.2rem; }
  .note { color: #555; font-size: 0.9rem; }
  .warning { background: #fff4e0; border: 1px solid #e0b060; padding: 0.6rem; border-radius: 6px; margin: 0.6rem 0; }
  .error { background: #fde8e8; border: 1px solid #d08080; padding: 0.6rem; border-radius: 6px; margin: 0.6rem 0; }
  .ok { color: #1a7a2e; }
  .progress { font-style: italic; color: #555; }
  .section { border-left: 3px solid #007BFF; padding-left: 0.8rem; margin: 1rem 0; }
  .section-body { white-space: pre-wrap; }
  .thumbs img { max-height: 90px; margin: 0.2rem; border: 1px solid #ccc; border-radius: 4px; }
  footer { margin-top: 2.5rem; border-top: 1px solid #ddd; padding-top: 1rem; text-align: center; }
</style>
</head>
<body>
<h1>Multimodal AI Design Agent Team</h1>

<fieldset>
  <legend>API Configuration</legend>
  <label for="api-key">Enter your Gemini API Key</label>
  <input type="password" id="api-key" autocomplete="off" placeholder="AIza...">
  <div id="key-status" class="note">Please enter your API key to proceed. Get one from Google AI Studio.</div>
</fieldset>

<fieldset>
  <legend>Upload Design</legend>
  <input type="file" id="file-input" accept="image/*" multiple>
  <button type="button" id="paste-btn">Paste an Image</button>
  <div id="thumbs" class="thumbs"></div>
</fieldset>

<fieldset>
  <legend>Configuration</legend>
  <div>Select Analysis Types</div>
  <label class="inline"><input type="checkbox" name="categories" value="Visual Design"> Visual Design</label>
  <label class="inline"><input type="checkbox" name="categories" value="User Experience" checked> User Experience</label>
  <div style="margin-top:0.8rem">Focus Areas</div>
  <label class="inline"><input type="checkbox" name="focus_areas" value="Color Scheme"> Color Scheme</label>
  <label class="inline"><input type="checkbox" name="focus_areas" value="Typography"> Typography</label>
  <label class="inline"><input type="checkbox" name="focus_areas" value="Layout"> Layout</label>
  <label class="inline"><input type="checkbox" name="focus_areas" value="Navigation"> Navigation</label>
  <label class="inline"><input type="checkbox" name="focus_areas" value="Interactions" checked> Interactions</label>
  <label class="inline"><input type="checkbox" name="focus_areas" value="Accessibility"> Accessibility</label>
  <div style="margin-top:0.8rem">
    <label for="context">Additional Context</label>
    <textarea id="context" placeholder="Describe your product, target audience, or specific concerns..."></textarea>
  </div>
</fieldset>

<p><button type="button" id="run-btn">Run Analysis</button></p>
<div id="messages"></div>
<div id="results"></div>

<footer>
  <h4>Tips for Best Results</h4>
  <p class="note">
    &bull; Upload clear, high-resolution images<br>
    &bull; Provide specific context about your target audience
  </p>
</footer>

<script>
let sessionId = null;
const uploads = [];   // { blob, name }
const pasted = [];    // data URLs

async function init() {
  const resp = await fetch('/api/sessions', { method: 'POST' });
  const body = await resp.json();
  sessionId = body.session_id;
  if (body.credential_present) {
    setKeyStatus('API Key provided!', true);
  }
}

function setKeyStatus(text, ok) {
  const el = document.getElementById('key-status');
  el.textContent = text;
  el.className = ok ? 'note ok' : 'note';
}

document.getElementById('api-key').addEventListener('change', async (ev) => {
  const resp = await fetch(`/api/sessions/${sessionId}/credential`, {
    method: 'PUT',
    headers: { 'Content-Type': 'application/json' },
    body: JSON.stringify({ api_key: ev.target.value }),
  });
  const body = await resp.json();
  if (body.credential_present) {
    setKeyStatus('API Key provided!', true);
  } else {
    setKeyStatus('Please enter your API key to proceed. Get one from Google AI Studio.', false);
  }
});

document.getElementById('file-input').addEventListener('change', (ev) => {
  for (const file of ev.target.files) {
    uploads.push({ blob: file, name: file.name });
    const img = document.createElement('img');
    img.src = URL.createObjectURL(file);
    document.getElementById('thumbs').appendChild(img);
  }
  ev.target.value = '';
});

document.getElementById('paste-btn').addEventListener('click', async () => {
  try {
    const items = await navigator.clipboard.read();
    for (const item of items) {
      const type = item.types.find(t => t.startsWith('image/'));
      if (!type) continue;
      const blob = await item.getType(type);
      const dataUrl = await new Promise((resolve) => {
        const reader = new FileReader();
        reader.onload = () => resolve(reader.result);
        reader.readAsDataURL(blob);
      });
      pasted.push(dataUrl);
      const img = document.createElement('img');
      img.src = dataUrl;
      document.getElementById('thumbs').appendChild(img);
    }
  } catch (e) {
    showMessage('warning', 'Clipboard access was denied or held no image.');
  }
});

function selected(name) {
  return [...document.querySelectorAll(`input[name=${name}]:checked`)].map(el => el.value);
}

function showMessage(kind, text) {
  const div = document.createElement('div');
  div.className = kind;
  div.textContent = text;
  document.getElementById('messages').appendChild(div);
}

function renderReport(report) {
  const results = document.getElementById('results');
  for (const skipped of report.skipped_assets || []) {
    showMessage('error', `Error processing image ${skipped.name}: ${skipped.reason}`);
  }
  for (const section of report.sections || []) {
    const div = document.createElement('div');
    div.className = 'section';
    const h = document.createElement('h2');
    h.textContent = section.heading;
    const body = document.createElement('div');
    body.className = 'section-body';
    body.textContent = section.body;
    div.append(h, body);
    results.appendChild(div);
  }
  if (report.summary) {
    const div = document.createElement('div');
    div.className = 'section';
    const h = document.createElement('h2');
    h.textContent = 'Key Takeaways';
    const body = document.createElement('div');
    body.className = 'section-body';
    body.textContent = report.summary;
    div.append(h, body);
    results.appendChild(div);
  }
  if (report.aborted) {
    showMessage('error', report.aborted.error);
    showMessage('error', report.aborted.hint);
  }
}

document.getElementById('run-btn').addEventListener('click', async () => {
  const btn = document.getElementById('run-btn');
  document.getElementById('messages').textContent = '';
  document.getElementById('results').textContent = '';

  const categories = selected('categories');
  const form = new FormData();
  for (const upload of uploads) form.append('image', upload.blob, upload.name);
  for (const dataUrl of pasted) form.append('pasted_image', dataUrl);
  for (const cat of categories) form.append('categories', cat);
  for (const area of selected('focus_areas')) form.append('focus_areas', area);
  form.append('context', document.getElementById('context').value);

  btn.disabled = true;
  for (const cat of categories) showMessage('progress', `Analyzing ${cat.toLowerCase()}...`);
  try {
    const resp = await fetch(`/api/sessions/${sessionId}/runs`, { method: 'POST', body: form });
    const body = await resp.json();
    document.getElementById('messages').textContent = '';
    if (body.warning) {
      showMessage('warning', body.warning + (body.hint ? ` ${body.hint}` : ''));
    } else if (body.error) {
      showMessage('error', body.error + (body.hint ? ` ${body.hint}` : ''));
    } else {
      renderReport(body);
    }
  } catch (e) {
    document.getElementById('messages').textContent = '';
    showMessage('error', `The analysis request failed: ${e}`);
  } finally {
    btn.disabled = false;
  }
});

init();
</script>
</body>
</html>
"#;
